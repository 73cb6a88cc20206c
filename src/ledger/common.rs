/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Anything the spend chart can plot: a labelled column with a withdrawal
/// total.
pub trait SpendSource: NamedEntity {
    /// Sum of all outgoing amounts. Always zero or negative.
    fn withdrawals(&self) -> f64;
}

impl<T: NamedEntity + ?Sized> NamedEntity for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: SpendSource + ?Sized> SpendSource for &T {
    fn withdrawals(&self) -> f64 {
        (**self).withdrawals()
    }
}
