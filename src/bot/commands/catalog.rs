//! Catalog Discord commands - `service_manage`, `package_manage`, and `category_manage`.
//!
//! Services and packages are what appointments book; categories group services.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        api::{NewCategory, NewPackage, NewService},
        bot::{BotData, choices::ServiceTierChoice, freshness_note, handlers::autocomplete},
        core::{
            directory::Directory,
            report::{LIST_FIELD_BUDGET, fit_fields, format_amount, format_duration, list_footer},
        },
        errors::{Error, Result},
        models::{BusinessAggregate, ServiceType},
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    fn category_id(aggregate: &BusinessAggregate, name: &str) -> Result<i64> {
        let wanted = name.trim();
        aggregate
            .categories
            .iter()
            .find(|category| category.name.trim().eq_ignore_ascii_case(wanted))
            .map(|category| category.id)
            .ok_or_else(|| Error::not_found("service category", wanted))
    }

    fn category_name(aggregate: &BusinessAggregate, id: Option<i64>) -> &str {
        id.and_then(|id| aggregate.categories.iter().find(|c| c.id == id))
            .map_or("Uncategorized", |category| category.name.as_str())
    }

    // ========== Services ==========

    /// Parent command for managing services.
    #[poise::command(
        slash_command,
        subcommands("service_add", "service_list", "service_delete")
    )]
    pub async fn service_manage(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Service management command. Available subcommands:\n\
            `/service_manage add` - Add a service\n\
            `/service_manage list` - List services\n\
            `/service_manage delete` - Delete a service";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds a bookable service.
    #[poise::command(slash_command, rename = "add")]
    pub async fn service_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Service name (e.g., 'Haircut')"] name: String,
        #[description = "Price (e.g., 300)"] price: f64,
        #[description = "Length in minutes"] duration: u32,
        #[description = "Tier"] tier: ServiceTierChoice,
        #[description = "Category"]
        #[autocomplete = "autocomplete::autocomplete_category_name"]
        category: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let category = match category.as_deref() {
            Some(name) => {
                let read = data.snapshot().await?;
                Some(category_id(&read.snapshot.aggregate, name)?)
            }
            None => None,
        };
        let service = NewService {
            business: data.context.business_id,
            service_name: name.trim().to_string(),
            service_type: tier.into(),
            category,
            duration_in_mins: duration,
            price,
        };

        let created = data.api.create_service(&service).await?;
        info!("Service {} added by {}", created.id, ctx.author().name);
        data.refresh_after_write().await;

        ctx.say(format!(
            "✅ Service **{}** added: {} for {}.",
            created.service_name,
            format_duration(created.duration_in_mins),
            format_amount(data.currency(), created.price)
        ))
        .await?;
        Ok(())
    }

    /// Lists services with prices and durations.
    #[poise::command(slash_command, rename = "list")]
    pub async fn service_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let read = data.snapshot().await?;
        let aggregate = &read.snapshot.aggregate;

        if aggregate.services.is_empty() {
            ctx.say("No services yet. Use `/service_manage add` to create one!")
                .await?;
            return Ok(());
        }

        let all_fields = aggregate
            .services
            .iter()
            .take(data.settings.display.max_listed.min(25))
            .map(|service| {
                (
                    format!(
                        "{} ({})",
                        service.service_name,
                        format_amount(data.currency(), service.price)
                    ),
                    format!(
                        "⏱️ {}\n🏷️ {} / {}",
                        format_duration(service.duration_in_mins),
                        service.service_type.map_or("-", ServiceType::as_str),
                        category_name(aggregate, service.category)
                    ),
                    true,
                )
            })
            .collect::<Vec<_>>();
        let fields = fit_fields(all_fields, LIST_FIELD_BUDGET);
        let footer = list_footer(fields.len(), aggregate.services.len(), &freshness_note(&read));

        let embed = serenity::CreateEmbed::default()
            .title(format!("**Services** ({})", aggregate.services.len()))
            .color(0x0058_65F2)
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(footer));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Deletes a service.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn service_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Service name"]
        #[autocomplete = "autocomplete::autocomplete_service_names"]
        name: String,
    ) -> Result<()> {
        let data = ctx.data();
        let read = data.snapshot().await?;
        let found = Directory::from_aggregate(&read.snapshot.aggregate)
            .find_service(&name)
            .cloned()
            .ok_or_else(|| Error::not_found("service", name.trim()))?;

        data.api.delete_service(found.id).await?;
        info!("Service {} deleted by {}", found.id, ctx.author().name);
        data.refresh_after_write().await;

        ctx.say(format!("🗑️ Service **{}** deleted.", found.service_name))
            .await?;
        Ok(())
    }

    // ========== Packages ==========

    /// Parent command for managing packages.
    #[poise::command(slash_command, subcommands("package_add", "package_list"))]
    pub async fn package_manage(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Package management command. Available subcommands:\n\
            `/package_manage add` - Add a package\n\
            `/package_manage list` - List packages";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds a package sold at a fixed price.
    #[poise::command(slash_command, rename = "add")]
    pub async fn package_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Package name (e.g., 'Bridal Glow')"] name: String,
        #[description = "Price (e.g., 2500)"] price: f64,
        #[description = "Length in minutes"] duration: u32,
    ) -> Result<()> {
        let data = ctx.data();
        let package = NewPackage {
            business: data.context.business_id,
            package_name: name.trim().to_string(),
            package_duration_in_mins: duration,
            package_price: price,
        };

        let created = data.api.create_package(&package).await?;
        info!("Package {} added by {}", created.id, ctx.author().name);
        data.refresh_after_write().await;

        ctx.say(format!(
            "✅ Package **{}** added: {} for {}.",
            created.package_name,
            format_duration(created.package_duration_in_mins),
            format_amount(data.currency(), created.package_price)
        ))
        .await?;
        Ok(())
    }

    /// Lists packages.
    #[poise::command(slash_command, rename = "list")]
    pub async fn package_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let read = data.snapshot().await?;
        let packages = &read.snapshot.aggregate.packages;

        if packages.is_empty() {
            ctx.say("No packages yet. Use `/package_manage add` to create one!")
                .await?;
            return Ok(());
        }

        let all_fields = packages
            .iter()
            .take(data.settings.display.max_listed.min(25))
            .map(|package| {
                (
                    package.package_name.clone(),
                    format!(
                        "{}\n⏱️ {}",
                        format_amount(data.currency(), package.package_price),
                        format_duration(package.package_duration_in_mins)
                    ),
                    true,
                )
            })
            .collect::<Vec<_>>();
        let fields = fit_fields(all_fields, LIST_FIELD_BUDGET);
        let footer = list_footer(fields.len(), packages.len(), &freshness_note(&read));

        let embed = serenity::CreateEmbed::default()
            .title(format!("**Packages** ({})", packages.len()))
            .color(0x0058_65F2)
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(footer));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    // ========== Categories ==========

    /// Parent command for managing service categories.
    #[poise::command(slash_command, subcommands("category_add", "category_list"))]
    pub async fn category_manage(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Category management command. Available subcommands:\n\
            `/category_manage add` - Add a service category\n\
            `/category_manage list` - List categories";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds a service category.
    #[poise::command(slash_command, rename = "add")]
    pub async fn category_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Category name (e.g., 'Hair')"] name: String,
        #[description = "Short description"] description: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let category = NewCategory {
            business: data.context.business_id,
            name: name.trim().to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
        };

        let created = data.api.create_category(&category).await?;
        info!("Category {} added by {}", created.id, ctx.author().name);
        data.refresh_after_write().await;

        ctx.say(format!("✅ Category **{}** added.", created.name))
            .await?;
        Ok(())
    }

    /// Lists service categories with how many services each holds.
    #[poise::command(slash_command, rename = "list")]
    pub async fn category_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let read = data.snapshot().await?;
        let aggregate = &read.snapshot.aggregate;

        if aggregate.categories.is_empty() {
            ctx.say("No categories yet. Use `/category_manage add` to create one!")
                .await?;
            return Ok(());
        }

        let all_fields = aggregate
            .categories
            .iter()
            .take(data.settings.display.max_listed.min(25))
            .map(|category| {
                let services = aggregate
                    .services
                    .iter()
                    .filter(|service| service.category == Some(category.id))
                    .count();
                let mut value = format!("{services} service(s)");
                if let Some(description) = &category.description {
                    value = format!("{description}\n{value}");
                }
                (category.name.clone(), value, true)
            })
            .collect::<Vec<_>>();
        let fields = fit_fields(all_fields, LIST_FIELD_BUDGET);
        let footer = list_footer(
            fields.len(),
            aggregate.categories.len(),
            &freshness_note(&read),
        );

        let embed = serenity::CreateEmbed::default()
            .title(format!("**Service Categories** ({})", aggregate.categories.len()))
            .color(0x0058_65F2)
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(footer));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::test_utils::sample_aggregate;

        #[test]
        fn test_category_lookup() {
            let aggregate = sample_aggregate();
            assert!(matches!(category_id(&aggregate, " hair "), Ok(1)));
            assert!(matches!(
                category_id(&aggregate, "Nails"),
                Err(Error::NotFound { .. })
            ));
            assert_eq!(category_name(&aggregate, Some(1)), "Hair");
            assert_eq!(category_name(&aggregate, Some(9)), "Uncategorized");
            assert_eq!(category_name(&aggregate, None), "Uncategorized");
        }
    }
}

// Re-export all commands
pub use inner::*;
