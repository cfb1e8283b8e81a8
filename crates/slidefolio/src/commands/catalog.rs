use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::catalog::{Catalog, load};
use crate::render::card;
use crate::theme;

/// Load a catalog (or the built-in one) and print it.
pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let catalog = match file {
        Some(path) => load::from_path(path)?,
        None => Catalog::builtin()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", render_tree(&catalog));
    }
    Ok(())
}

/// Sections and slides as an indented, colored listing.
pub fn render_tree(catalog: &Catalog) -> String {
    let mut out = String::new();
    if let Some(title) = &catalog.info.title {
        let _ = writeln!(out, "{}", title.bold());
    }
    let _ = writeln!(
        out,
        "{} section(s), {} slide(s)",
        catalog.sections().len(),
        catalog.slide_count()
    );

    for section in catalog.sections() {
        let swatch = match theme::parse_hex(&section.color) {
            Some(c) => "\u{25a0}".truecolor(c.r(), c.g(), c.b()).to_string(),
            None => "\u{25a1}".dimmed().to_string(),
        };
        let _ = writeln!(
            out,
            "\n{swatch} {} {}",
            section.name.bold(),
            format!("#{} {}", section.id, section.color).dimmed()
        );
        for slide in &section.slides {
            let _ = writeln!(
                out,
                "  {:>5}  {:<6} {}",
                slide.id.to_string().cyan(),
                slide.media.kind_name(),
                slide.title
            );
            if !slide.body.trim().is_empty() {
                let _ = writeln!(
                    out,
                    "         {}",
                    card::excerpt(&slide.body, 60).dimmed()
                );
            }
        }
    }
    out
}
