//! Helper macros shared by models

/// Implements diesel `ToSql`/`FromSql` for an enum stored as `VarChar`.
/// The enum must derive `AsExpression` and `FromSqlRow` with `#[sql_type = "VarChar"]`
/// and implement `Display` and `FromStr` with matching spellings.
#[macro_export]
macro_rules! varchar_enum_sql {
    ($t:ty) => {
        impl ::diesel::serialize::ToSql<::diesel::sql_types::VarChar, ::diesel::pg::Pg> for $t {
            fn to_sql<W: ::std::io::Write>(&self, out: &mut ::diesel::serialize::Output<W, ::diesel::pg::Pg>) -> ::diesel::serialize::Result {
                ::std::io::Write::write_all(out, self.to_string().as_bytes())?;
                Ok(::diesel::serialize::IsNull::No)
            }
        }

        impl ::diesel::deserialize::FromSql<::diesel::sql_types::VarChar, ::diesel::pg::Pg> for $t {
            fn from_sql(bytes: Option<&[u8]>) -> ::diesel::deserialize::Result<Self> {
                let raw = <String as ::diesel::deserialize::FromSql<::diesel::sql_types::VarChar, ::diesel::pg::Pg>>::from_sql(bytes)?;
                raw.parse::<$t>()
                    .map_err(|_| format!("Unrecognized enum variant: {}", raw).into())
            }
        }
    };
}
