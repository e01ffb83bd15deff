//! Locale-aware free-text and per-field matching.
//!
//! Matching is simple lowercase substring containment - not tokenized, not
//! fuzzy. A product's searchable text is assembled into one haystack in a
//! fixed field order; advanced mode instead tests individual fields, with
//! name and description checked across every locale so a French term still
//! matches while the shopper browses in Arabic.

use serde::{Deserialize, Serialize};

use dukkan_core::{Locale, LocalizedText, Product};

/// Per-field terms for advanced search. All supplied terms must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedTerms {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
}

impl AdvancedTerms {
    /// Whether no usable term was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.description, &self.brand, &self.sku]
            .iter()
            .all(|term| normalize(term.as_deref()).is_none())
    }

    /// Whether every supplied term matches its field on `product`.
    ///
    /// Name and description terms match any locale variant; brand and SKU
    /// terms match their single field. A term supplied against an absent
    /// field fails.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(term) = normalize(self.name.as_deref()) {
            if !localized_contains(&product.name, &term) {
                return false;
            }
        }
        if let Some(term) = normalize(self.description.as_deref()) {
            let hit = product
                .description
                .as_ref()
                .is_some_and(|description| localized_contains(description, &term));
            if !hit {
                return false;
            }
        }
        if let Some(term) = normalize(self.brand.as_deref()) {
            let hit = product
                .brand
                .as_deref()
                .is_some_and(|brand| brand.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        if let Some(term) = normalize(self.sku.as_deref()) {
            let hit = product
                .sku
                .as_deref()
                .is_some_and(|sku| sku.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Whether `term` matches the product's combined searchable text.
///
/// Empty and whitespace-only terms always match.
#[must_use]
pub fn matches_term(product: &Product, term: &str, locale: Locale) -> bool {
    let Some(needle) = normalize(Some(term)) else {
        return true;
    };
    haystack(product, locale).contains(&needle)
}

/// Build the lowercase haystack for a product.
///
/// Field order is fixed: name in the requested locale, name in all other
/// locales, description in all locales, brand, SKU, tags. Absent fields
/// contribute nothing.
fn haystack(product: &Product, locale: Locale) -> String {
    let mut hay = String::new();
    push_part(&mut hay, product.name.resolve(locale));
    for variant in product.name.variants() {
        push_part(&mut hay, variant);
    }
    if let Some(description) = &product.description {
        for variant in description.variants() {
            push_part(&mut hay, variant);
        }
    }
    push_part(&mut hay, product.brand.as_deref().unwrap_or_default());
    push_part(&mut hay, product.sku.as_deref().unwrap_or_default());
    for tag in &product.tags {
        push_part(&mut hay, tag);
    }
    hay.to_lowercase()
}

fn push_part(hay: &mut String, part: &str) {
    if part.is_empty() {
        return;
    }
    if !hay.is_empty() {
        hay.push(' ');
    }
    hay.push_str(part);
}

/// Trim and lowercase a term; blank input means "no term".
fn normalize(term: Option<&str>) -> Option<String> {
    let trimmed = term?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn localized_contains(text: &LocalizedText, needle: &str) -> bool {
    text.variants()
        .any(|variant| variant.to_lowercase().contains(needle))
}
