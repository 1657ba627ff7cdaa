pub mod tax_resolver;

pub use tax_resolver::TaxRuleResolver;
