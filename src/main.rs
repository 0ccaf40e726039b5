// Demo front end for the form filling pipeline: reads recognized text (the
// output of the external OCR stage) from a file and prints the extracted
// entities and the filled form, either as a report or as JSON.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use formfill::forms::schema;
use formfill::models::{DocumentTypeHint, FormType};
use formfill::pipeline::{FillResult, FormFillPipeline};
use formfill::utils::FormFillError;

#[derive(Parser)]
#[command(name = "formfill", about = "Fill a government form from OCR text")]
struct Args {
    /// Path to a UTF-8 text file with the recognized document text
    input: PathBuf,

    /// Target form type: income_certificate, birth_certificate, ration_card
    /// (anything else maps generically)
    #[arg(short, long, default_value = "generic")]
    form: String,

    /// Declared source document type: aadhaar, pan or voter
    #[arg(short, long)]
    document: Option<String>,

    /// Emit the result as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), FormFillError> {
    // The text file stands in for the external recognizer's output, so a
    // failure to read it is a recognition failure from this crate's view.
    let text = std::fs::read_to_string(&args.input).map_err(|err| {
        FormFillError::Recognition(format!("cannot read {}: {}", args.input.display(), err))
    })?;
    let form_type = FormType::parse(&args.form);
    let document_type = args.document.as_deref().and_then(DocumentTypeHint::parse);

    let result = FormFillPipeline::process_with(&text, form_type, document_type, &[]);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }
    Ok(())
}

fn print_report(result: &FillResult) {
    println!("\n===============================================");
    println!("      {}", schema::title(result.form_type).to_uppercase());
    println!("===============================================\n");

    println!("EXTRACTED ENTITIES:");
    for (kind, entity) in result.entities.entries() {
        println!(
            "  {:<12} {:<30} (confidence {:.2})",
            kind.key(),
            if entity.value.is_empty() { "-" } else { entity.value.as_str() },
            entity.confidence
        );
    }

    println!("\nFILLED FORM:");
    for (name, value) in &result.form {
        let display = match value.as_text() {
            Some("") | None => "-".to_string(),
            Some(text) => text.to_string(),
        };
        println!(
            "  {:<28} {:<30} (confidence {:.2})",
            schema::field_label(name),
            display,
            result.confidence[name]
        );
    }

    let instructions = schema::instructions(result.form_type);
    if !instructions.is_empty() {
        println!("\nINSTRUCTIONS:");
        for instruction in instructions {
            println!("  - {}", instruction);
        }
    }

    let documents = schema::required_documents(result.form_type);
    if !documents.is_empty() {
        println!("\nREQUIRED DOCUMENTS:");
        for document in documents {
            println!("  - {}", document);
        }
    }
}
