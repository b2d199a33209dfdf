use crate::analyzer::parse_images_from_kubernetes_yaml;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct FileImages {
    file: PathBuf,
    images: Vec<String>,
}

pub fn handle_images(files: Vec<PathBuf>, json: bool) -> crate::Result<()> {
    let mut results = Vec::with_capacity(files.len());
    for file in files {
        let images = parse_images_from_kubernetes_yaml(&file)?;
        results.push(FileImages { file, images });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        println!("📄 {}", result.file.display().to_string().bold());
        if result.images.is_empty() {
            println!("  {}", "(no images)".dimmed());
        }
        for image in &result.images {
            println!("  🐳 {}", image);
        }
    }

    Ok(())
}
