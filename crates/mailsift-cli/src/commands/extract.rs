use std::path::PathBuf;

use mailsift_core::error::SiftError;
use mailsift_core::export::ExportFormat;
use mailsift_core::extraction::pdftotext::PdftotextExtractor;
use mailsift_core::model::InputFile;
use mailsift_core::progress::NullProgress;

use crate::output;

pub fn run(
    paths: Vec<PathBuf>,
    output_format: &str,
    out: Option<PathBuf>,
    format: Option<String>,
    quiet: bool,
) -> Result<(), SiftError> {
    // clap already enforces at least one file; the core rejects an empty
    // batch as well.
    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        files.push(InputFile::from_path(path)?);
    }

    let extractor = PdftotextExtractor::new();
    let report = if quiet {
        mailsift_core::extract_emails(&files, &extractor, &mut NullProgress)?
    } else {
        let mut bar = output::progress::BarSink::new(files.len() as u64);
        let report = mailsift_core::extract_emails(&files, &extractor, &mut bar);
        bar.finish();
        report?
    };

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => output::summary::print(&report),
    }

    if let Some(out_path) = out {
        let export_format = match format {
            Some(f) => ExportFormat::from_str_loose(&f)?,
            None => ExportFormat::from_path(&out_path).unwrap_or(ExportFormat::Xlsx),
        };
        let bytes = export_format.render(&report.emails)?;
        std::fs::write(&out_path, bytes)?;
        eprintln!(
            "{} address(es) written to {}",
            report.emails.len(),
            out_path.display()
        );
    }

    Ok(())
}
