use crate::domain::slot::CashSlot;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// One row of the slot report.
#[derive(Debug, Serialize, PartialEq)]
struct SlotRecord {
    denomination: Decimal,
    count: u32,
    total: Decimal,
}

impl From<&CashSlot> for SlotRecord {
    fn from(slot: &CashSlot) -> Self {
        Self {
            denomination: slot.denomination().amount().to_decimal(),
            count: slot.count(),
            total: slot.total_value().to_decimal(),
        }
    }
}

/// Writes the state of every slot as CSV with a `denomination,count,total` header.
pub struct SlotWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SlotWriter<W> {
    pub fn new(destination: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(destination),
        }
    }

    pub fn write_slots<'a>(&mut self, slots: impl IntoIterator<Item = &'a CashSlot>) -> Result<()> {
        for slot in slots {
            self.writer.serialize(SlotRecord::from(slot))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
