use console::style;
use mailsift_core::model::RunReport;

pub fn print(report: &RunReport) {
    if report.found_nothing() {
        // Distinct from a failed run: the batch was processed, nothing matched.
        println!(
            "{}",
            style("No email addresses found in the supplied files.").yellow()
        );
    } else {
        println!(
            "Extraction complete: {} unique email address(es) found.",
            report.emails.len()
        );
        println!();
        for email in &report.emails {
            println!("  {email}");
        }
    }

    if report.files_failed > 0 {
        println!();
        println!(
            "{}",
            style(format!(
                "{} of {} file(s) could not be processed:",
                report.files_failed, report.files_total
            ))
            .yellow()
        );
        for line in report
            .logs
            .iter()
            .filter(|l| l.starts_with("Error processing file"))
        {
            println!("  {line}");
        }
    }
}
