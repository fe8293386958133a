pub mod customer;
pub mod invoice;
pub mod revenue;
pub mod user;

pub use customer::PostgresCustomerRepository;
pub use invoice::PostgresInvoiceRepository;
pub use revenue::PostgresRevenueRepository;
pub use user::PostgresUserRepository;

/// `ILIKE` pattern matching `query` anywhere, with `%`, `_` and `\` in the
/// query taken literally.
pub(crate) fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern(""), "%%");
        assert_eq!(contains_pattern("lee"), "%lee%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
    }
}
