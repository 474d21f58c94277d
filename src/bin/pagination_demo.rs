//! Prints an HTML page showing the navigation in several configurations.

use std::env;

use dotenvy::dotenv;
use pushkind_pagination::models::config::PaginationConfig;
use pushkind_pagination::{MenuRenderer, Pagination, PatternUrlGenerator};

const TOTAL_ITEMS: i64 = 200;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_dir = env::var("PAGINATION_CONFIG_DIR").unwrap_or_else(|_| "config".into());

    let config = match PaginationConfig::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading pagination config: {err}");
            std::process::exit(1);
        }
    };

    let pagination = Pagination::from_config(TOTAL_ITEMS, 1, &config);

    let demos = [
        ("Demo 1", "Configured defaults", pagination.clone()),
        (
            "Demo 2",
            "With current page number 7",
            pagination.with_current_page(7),
        ),
        (
            "Demo 3",
            "With 4 maximal pages to show",
            pagination.with_max_pages_to_show(4),
        ),
        (
            "Demo 4",
            "With 4 maximal pages to show and current page number 7",
            pagination.with_current_page(7).with_max_pages_to_show(4),
        ),
        (
            "Demo 5",
            "With another url pattern",
            pagination.with_url_generator(PatternUrlGenerator::new().add_page_url(
                "?page={page}",
                Some("{page}"),
                None,
            )),
        ),
        (
            "Demo 6",
            "With custom previous and next labels and current page number 7",
            pagination
                .with_renderer(MenuRenderer::new("prev", "next"))
                .with_current_page(7),
        ),
    ];

    println!("<!DOCTYPE html>");
    println!("<html><head><title>Pagination Demo</title></head><body><article>");
    println!("<h1>Pagination Demo</h1>");

    for (title, description, pagination) in &demos {
        let nav = match pagination.render() {
            Ok(nav) => nav,
            Err(err) => {
                log::error!("Failed to render {title}: {err}");
                std::process::exit(1);
            }
        };

        println!("<section><h2>{title}</h2><p>{description}</p><nav>{nav}</nav></section>");
        log::info!(
            "{title}: items {}-{} of {}, {} page links",
            pagination.total_items_from(),
            pagination.total_items_to(),
            pagination.total_items(),
            pagination.page_count()
        );
    }

    println!("</article></body></html>");
}
