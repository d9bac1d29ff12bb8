//! Serde helpers for SurrealDB record ids
//!
//! Record id 在两种表示之间转换：
//! - API JSON 中为字符串 "table:id"
//! - 数据库中为 SurrealDB 原生 RecordId

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;
use surrealdb::RecordId;

struct RecordIdVisitor;

impl<'de> Visitor<'de> for RecordIdVisitor {
    type Value = RecordId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a record id string 'table:id' or a native RecordId")
    }

    fn visit_str<E>(self, value: &str) -> Result<RecordId, E>
    where
        E: de::Error,
    {
        value
            .parse::<RecordId>()
            .map_err(|_| de::Error::custom(format!("invalid record id: {value}")))
    }

    fn visit_map<M>(self, map: M) -> Result<RecordId, M::Error>
    where
        M: de::MapAccess<'de>,
    {
        // 数据库原生格式，委托给 RecordId 自身的反序列化
        RecordId::deserialize(de::value::MapAccessDeserializer::new(map))
    }
}

/// `Option<RecordId>` as an optional "table:id" string
pub mod option_record_id {
    use super::*;

    pub fn serialize<S>(id: &Option<RecordId>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => s.serialize_some(&id.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptVisitor;

        impl<'de> Visitor<'de> for OptVisitor {
            type Value = Option<RecordId>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an optional record id")
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_some<D2>(self, d: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                d.deserialize_any(RecordIdVisitor).map(Some)
            }
        }

        d.deserialize_option(OptVisitor)
    }
}
