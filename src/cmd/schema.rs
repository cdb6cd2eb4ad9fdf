//! Schema command - describe the columns of the table export

use crate::curve::CurvePoint;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// What to print
    #[arg(value_enum, default_value = "csv-fields")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema of one curve point
    JsonSchema,
    /// CSV header row
    CsvHeader,
    /// Column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                let schema = schema_for!(CurvePoint);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::CsvHeader => {
                let names: Vec<_> = CurvePoint::columns().iter().map(|c| c.name).collect();
                println!("{}", names.join(","));
            }
            SchemaFormat::CsvFields => {
                println!("Curve export columns (table --format csv)");
                println!();
                for column in CurvePoint::columns() {
                    println!("{:18} {:9} {}", column.name, column.unit, column.description);
                }
            }
        }
        Ok(())
    }
}
