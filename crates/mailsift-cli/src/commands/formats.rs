use console::style;
use mailsift_core::error::SiftError;
use mailsift_core::extraction::{antiword, pdftotext::PdftotextExtractor};

pub fn run() -> Result<(), SiftError> {
    println!("Input formats:");
    println!("  .xls .xlsx .xlsm   Excel workbooks (built-in)");
    println!("  .docx              Word documents (built-in)");
    println!(
        "  .doc               Legacy Word documents (antiword: {})",
        availability(antiword::is_available())
    );
    println!(
        "  .pdf               PDF documents (pdftotext: {})",
        availability(PdftotextExtractor::is_available())
    );
    println!();
    println!("Export formats: xlsx, csv, txt");
    Ok(())
}

fn availability(found: bool) -> String {
    if found {
        style("available").green().to_string()
    } else {
        style("not found").red().to_string()
    }
}
