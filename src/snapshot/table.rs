use std::{fs::File, path::Path};

use arrow::{
    array::{ArrayRef, AsArray},
    compute::cast,
    datatypes::{DataType, Float64Type, Int64Type, SchemaRef},
    record_batch::RecordBatch,
};
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::prelude::*;

/// Column reference with the alternative names it may have in a snapshot.
#[derive(Copy, Clone, Debug)]
pub struct Column {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl Column {
    pub const fn new(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases }
    }

    fn names(self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Parquet snapshot read fully into memory.
pub struct Table {
    name: &'static str,
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl Table {
    #[instrument(skip_all, fields(table = name, path = %path.display()))]
    pub fn read(name: &'static str, path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open the `{name}` snapshot `{}`", path.display()))?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)
            .with_context(|| format!("`{}` is not a valid Parquet file", path.display()))?;
        let schema = builder.schema().clone();
        let batches = builder.build()?.collect::<Result<Vec<_>, _>>()?;
        let table = Self { name, schema, batches };
        info!(n_rows = table.n_rows(), "loaded");
        Ok(table)
    }

    #[cfg(test)]
    pub fn from_batch(name: &'static str, batch: RecordBatch) -> Self {
        Self { name, schema: batch.schema(), batches: vec![batch] }
    }

    pub fn n_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    /// Numeric column as floats. Nulls and NaNs become `None`.
    pub fn floats(&self, column: Column) -> Result<Vec<Option<f64>>> {
        let mut values = Vec::with_capacity(self.n_rows());
        for array in self.cast_column(column, &DataType::Float64)? {
            values.extend(array.as_primitive::<Float64Type>().iter().map(|value| {
                value.filter(|value| !value.is_nan())
            }));
        }
        Ok(values)
    }

    /// Numeric column as integers, floats are truncated.
    pub fn integers(&self, column: Column) -> Result<Vec<Option<i64>>> {
        let mut values = Vec::with_capacity(self.n_rows());
        for array in self.cast_column(column, &DataType::Int64)? {
            values.extend(array.as_primitive::<Int64Type>().iter());
        }
        Ok(values)
    }

    /// Any column rendered as text.
    pub fn strings(&self, column: Column) -> Result<Vec<Option<String>>> {
        let mut values = Vec::with_capacity(self.n_rows());
        for array in self.cast_column(column, &DataType::Utf8)? {
            values.extend(array.as_string::<i32>().iter().map(|value| value.map(str::to_owned)));
        }
        Ok(values)
    }

    /// Date, timestamp or ISO-formatted string column as dates.
    pub fn dates(&self, column: Column) -> Result<Vec<Option<NaiveDate>>> {
        self.strings(column)?
            .into_iter()
            .map(|value| {
                value
                    .map(|value| {
                        let date = value.get(..10).unwrap_or(value.as_str());
                        NaiveDate::parse_from_str(date, "%Y-%m-%d").with_context(|| {
                            format!("`{}.{}`: `{value}` is not a date", self.name, column.name)
                        })
                    })
                    .transpose()
            })
            .collect()
    }

    fn cast_column(&self, column: Column, data_type: &DataType) -> Result<Vec<ArrayRef>> {
        let index = column
            .names()
            .find_map(|name| self.schema.index_of(name).ok())
            .with_context(|| {
                format!("the `{}` snapshot has no `{}` column", self.name, column.name)
            })?;
        self.batches
            .iter()
            .map(|batch| {
                cast(batch.column(index), data_type).with_context(|| {
                    format!("`{}.{}` cannot be read as {data_type}", self.name, column.name)
                })
            })
            .collect()
    }
}
