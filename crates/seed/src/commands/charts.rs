//! Exports the section charts as SVG (and PNG where a converter exists).

use palika_charts::export_chart;
use palika_db::DbPool;
use palika_report::{fetch_section_rows, SectionId};

use crate::cli::ChartsArgs;
use crate::runner::SeedError;

const DEFAULT_MUNICIPALITY: &str = "नमूना गाउँपालिका";

pub async fn run(pool: &DbPool, args: ChartsArgs) -> Result<(), SeedError> {
    let municipality =
        std::env::var("MUNICIPALITY_NAME").unwrap_or_else(|_| DEFAULT_MUNICIPALITY.to_string());

    let mut exported = 0usize;
    for id in SectionId::ALL {
        let rows = fetch_section_rows(pool, *id).await?;
        let section = palika_report::sections::process(*id, &municipality, &rows);

        let mut charts = Vec::new();
        if let Some(svg) = &section.pie_svg {
            charts.push((format!("{}-pie", id.as_str()), svg));
        }
        if let Some(svg) = &section.bar_svg {
            charts.push((format!("{}-bar", id.as_str()), svg));
        }
        if charts.is_empty() {
            println!("{}: no data, skipped", id.as_str());
            continue;
        }

        for (stem, svg) in charts {
            let artifact = export_chart(svg, &args.out_dir, &stem)?;
            match &artifact.png_path {
                Some(png) => println!("{} + {}", artifact.svg_path.display(), png.display()),
                None => println!("{} (SVG only)", artifact.svg_path.display()),
            }
            exported += 1;
        }
    }
    println!("exported {exported} chart files to {}", args.out_dir.display());
    Ok(())
}
