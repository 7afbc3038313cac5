use crate::dataset::DatasetError;
use crate::domain::catalog::InvalidDimension;
use crate::domain::models::{ErrorBody, ErrorOut, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Single-line envelope, one per event in a streaming session.
pub fn envelope_line<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&JsonOut { ok: true, data })?)
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<InvalidDimension>().is_some() {
        "INVALID_DIMENSION"
    } else if err.downcast_ref::<DatasetError>().is_some() {
        "DATASET_INVALID"
    } else {
        "ERROR"
    }
}

pub fn error_envelope(err: &anyhow::Error) -> ErrorOut {
    ErrorOut {
        ok: false,
        error: ErrorBody {
            code: error_code(err).to_string(),
            message: err.to_string(),
        },
    }
}

pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        match serde_json::to_string_pretty(&error_envelope(err)) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("error: {}", err),
        }
    } else {
        eprintln!("error: {:#}", err);
    }
}
