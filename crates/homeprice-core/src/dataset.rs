use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// One housing observation. Fields are read positionally: size, rooms, price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    pub size: f64,
    pub rooms: f64,
    pub price: f64,
}

impl Record {
    pub fn new(size: f64, rooms: f64, price: f64) -> Self {
        Self { size, rooms, price }
    }

    /// False if any field is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.size.is_finite() && self.rooms.is_finite() && self.price.is_finite()
    }
}

impl From<(f64, f64, f64)> for Record {
    fn from((size, rooms, price): (f64, f64, f64)) -> Self {
        Self { size, rooms, price }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "size: {}, rooms: {}, price: {}", self.size, self.rooms, self.price)
    }
}

/// Ordered, read-only collection of records.
///
/// A dataset is built once by a source or generator and then only borrowed;
/// wrap it in an `Arc` to share it between reduction tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Split into per-feature columns, keeping dataset order.
    pub fn columns(&self) -> Columns {
        let mut size = Vec::with_capacity(self.len());
        let mut rooms = Vec::with_capacity(self.len());
        let mut price = Vec::with_capacity(self.len());
        for record in &self.records {
            size.push(record.size);
            rooms.push(record.rooms);
            price.push(record.price);
        }
        Columns { size, rooms, price }
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Dataset {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
    pub size: Vec<f64>,
    pub rooms: Vec<f64>,
    pub price: Vec<f64>,
}

impl Columns {
    pub fn len(&self) -> usize {
        self.price.len()
    }

    pub fn is_empty(&self) -> bool {
        self.price.is_empty()
    }
}
