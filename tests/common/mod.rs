#![allow(dead_code)]

use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub const CONFIG_FIXTURE: &str = "tests/fixtures/config.cfg";
pub const USERDATA_FIXTURE: &str = "tests/fixtures/userdata.csv";

pub fn write_config(path: &Path, entries: &[(&str, &str)]) -> Result<(), Error> {
    let mut file = File::create(path)?;
    for (key, value) in entries {
        writeln!(file, "{key} = {value}")?;
    }
    Ok(())
}

pub fn sample_config_entries() -> Vec<(&'static str, &'static str)> {
    vec![
        ("JiShuL", "3000"),
        ("JiShuH", "25000"),
        ("YangLao", "0.08"),
        ("YiLiao", "0.02"),
        ("ShiYe", "0.005"),
        ("GongShang", "0"),
        ("ShengYu", "0"),
        ("GongJiJin", "0"),
    ]
}

pub fn write_userdata(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    for (id, income) in rows {
        wtr.write_record([id, income])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `rows` employees with incomes spread over 0..200_000.
pub fn generate_userdata(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    for i in 0..rows {
        let income = (i * 7_919) % 200_000;
        wtr.write_record([format!("E{i:05}"), income.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
