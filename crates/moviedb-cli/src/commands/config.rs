//! Configuration display command.

use crate::output::{self, OutputFormat};
use moviedb_core::config::AppConfig;
use moviedb_core::error::AppError;

/// Print the effective configuration
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => output::print_item(config, format),
        OutputFormat::Table => {
            println!("[store]");
            output::print_kv(
                "seed_path",
                config.store.seed_path.as_deref().unwrap_or("(none)"),
            );
            println!("[query]");
            output::print_kv(
                "default_page_size",
                &config.query.default_page_size.to_string(),
            );
            output::print_kv("max_page_size", &config.query.max_page_size.to_string());
            output::print_kv("default_sort_field", &config.query.default_sort_field);
            println!("[logging]");
            output::print_kv("level", &config.logging.level);
            output::print_kv("format", &config.logging.format);
        }
    }
    Ok(())
}
