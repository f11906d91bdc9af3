mod args;
mod config;
mod reader;
mod writer;

use fbe::{
    input::{InputParseError, InputRecord},
    services::BudgetService,
    Result,
};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning import...");

    let mut budget = fbe::build_budget_service();

    process_entries(&mut budget)?;

    log::debug!("Import complete. Beginning report...");

    report_to_std_out(&budget)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the entries file and replay every row through parse -> validate ->
/// record. Malformed rows and validation failures are logged and skipped;
/// safe-bound violations abort the run.
fn process_entries(budget: &mut BudgetService) -> Result {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputRecord>() {
        log::debug!("Parsing record into InputRecord: {record:?}");
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing record into EntryForm: {record:?}");
        let form = match record.parse_form() {
            Ok(form) => form,
            Err(e @ InputParseError::Money(_)) => return Err(e.into()),
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Validating entry form: {form:?}");
        let entry = match form.validate() {
            Ok(entry) => entry,
            Err(errors) => {
                log::warn!("Skipping invalid {:?} entry: {errors}", form.kind);
                continue;
            }
        };

        let transaction = budget.record(entry)?;
        log::debug!("Recorded {:?} transaction: {transaction:?}", entry.kind);
    }

    Ok(())
}

/// Build the summary report, and write it to stdout
fn report_to_std_out(budget: &BudgetService) -> Result {
    let report = budget.build_report()?;
    log::debug!("Successfully built report: {report:?}");

    let mut wtr = writer::build_csv_writer();
    wtr.serialize(&report)?;

    let output = writer::write_to_string(wtr)?;

    log::debug!("Writing to stdout: {output:?}");
    println!("{}", output);

    Ok(())
}
