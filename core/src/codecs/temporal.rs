//! codecs/temporal.rs
//! Date/time codecs.
//!
//! Layouts (shared across cluster members):
//!
//! ```text
//! local date      [ year i32 ][ month u8 ][ day u8 ]
//! local time      [ hour u8 ][ minute u8 ][ second u8 ][ nanos i32 ]
//! local datetime  date body + time body
//! offset datetime local datetime body + [ offset seconds i32 ]
//! ```

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::constants::type_ids;
use crate::cursor::{DataInput, DataOutput};
use crate::registry::Codec;
use crate::types::SerializationError;
use crate::value::Value;

fn mismatch(expected: &'static str, value: &Value) -> SerializationError {
    SerializationError::KindMismatch {
        expected,
        actual: value.kind(),
    }
}

fn write_date(out: &mut DataOutput, d: &NaiveDate) {
    out.write_i32(d.year());
    out.write_u8(d.month() as u8);
    out.write_u8(d.day() as u8);
}

fn read_date(input: &mut DataInput) -> Result<NaiveDate, SerializationError> {
    let year = input.read_i32()?;
    let month = input.read_u8()? as u32;
    let day = input.read_u8()? as u32;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SerializationError::Validation(format!("invalid date {year}-{month}-{day}")))
}

fn write_time(out: &mut DataOutput, t: &NaiveTime) {
    out.write_u8(t.hour() as u8);
    out.write_u8(t.minute() as u8);
    out.write_u8(t.second() as u8);
    out.write_i32(t.nanosecond() as i32);
}

fn read_time(input: &mut DataInput) -> Result<NaiveTime, SerializationError> {
    let hour = input.read_u8()? as u32;
    let minute = input.read_u8()? as u32;
    let second = input.read_u8()? as u32;
    let nanos = input.read_i32()?;
    if nanos < 0 {
        return Err(SerializationError::Validation(format!(
            "invalid nanosecond field {nanos}"
        )));
    }
    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos as u32).ok_or_else(|| {
        SerializationError::Validation(format!("invalid time {hour}:{minute}:{second}.{nanos}"))
    })
}

pub struct LocalDateCodec;

impl Codec for LocalDateCodec {
    fn id(&self) -> i32 {
        type_ids::LOCAL_DATE
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        match value {
            Value::Date(d) => {
                write_date(out, d);
                Ok(())
            }
            _ => Err(mismatch("local date", value)),
        }
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::Date(read_date(input)?))
    }
}

pub struct LocalTimeCodec;

impl Codec for LocalTimeCodec {
    fn id(&self) -> i32 {
        type_ids::LOCAL_TIME
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        match value {
            Value::Time(t) => {
                write_time(out, t);
                Ok(())
            }
            _ => Err(mismatch("local time", value)),
        }
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::Time(read_time(input)?))
    }
}

pub struct LocalDateTimeCodec;

impl Codec for LocalDateTimeCodec {
    fn id(&self) -> i32 {
        type_ids::LOCAL_DATE_TIME
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        match value {
            Value::DateTime(dt) => {
                write_date(out, &dt.date());
                write_time(out, &dt.time());
                Ok(())
            }
            _ => Err(mismatch("local datetime", value)),
        }
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let date = read_date(input)?;
        let time = read_time(input)?;
        Ok(Value::DateTime(NaiveDateTime::new(date, time)))
    }
}

pub struct OffsetDateTimeCodec;

impl Codec for OffsetDateTimeCodec {
    fn id(&self) -> i32 {
        type_ids::OFFSET_DATE_TIME
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        match value {
            Value::OffsetDateTime(dt) => {
                let local = dt.naive_local();
                write_date(out, &local.date());
                write_time(out, &local.time());
                out.write_i32(dt.offset().local_minus_utc());
                Ok(())
            }
            _ => Err(mismatch("offset datetime", value)),
        }
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let date = read_date(input)?;
        let time = read_time(input)?;
        let offset_seconds = input.read_i32()?;
        let offset = FixedOffset::east_opt(offset_seconds).ok_or_else(|| {
            SerializationError::Validation(format!("invalid utc offset {offset_seconds}s"))
        })?;
        let local = NaiveDateTime::new(date, time);
        let dt = local
            .and_local_timezone(offset)
            .single()
            .ok_or_else(|| SerializationError::Validation("ambiguous local datetime".into()))?;
        Ok(Value::OffsetDateTime(dt))
    }
}
