//! Constants used throughout the story core crate.
//!
//! Every user-facing phrase lives here so the French and English vocabularies stay side by
//! side and can be compared at a glance.

use crate::locale::Locale;

/// Locale used when the caller does not configure one.
pub const DEFAULT_LOCALE: Locale = Locale::Fr;

/// Sentence terminators that end the role and action spans.
pub const CLAUSE_TERMINATORS: [char; 2] = [',', '.'];

/// Sentence terminator that ends the benefit span.
pub const SENTENCE_TERMINATOR: char = '.';

// French

pub const FR_ROLE_MARKER: &str = "En tant que";
pub const FR_ACTION_MARKER: &str = "je veux";
pub const FR_BENEFIT_MARKER: &str = "afin de";

pub const FR_TITLE_LABEL: &str = "Titre";
pub const FR_DESCRIPTION_LABEL: &str = "Description";
pub const FR_PRODUCT_LABEL: &str = "Produit";
pub const FR_PRIORITY_LABEL: &str = "Priorité";

pub const FR_WARNING_TITLE: &str = "Format de user story non standard";
pub const FR_WARNING_DESCRIPTION: &str =
    "La description devrait suivre le format : En tant que [rôle], je veux [action] afin de [bénéfice].";

// English

pub const EN_ROLE_MARKER: &str = "As a";
pub const EN_ACTION_MARKER: &str = "I want";
pub const EN_BENEFIT_MARKER: &str = "in order to";

pub const EN_TITLE_LABEL: &str = "Title";
pub const EN_DESCRIPTION_LABEL: &str = "Description";
pub const EN_PRODUCT_LABEL: &str = "Product";
pub const EN_PRIORITY_LABEL: &str = "Priority";

pub const EN_WARNING_TITLE: &str = "Non-standard user story format";
pub const EN_WARNING_DESCRIPTION: &str =
    "The description should follow the format: As a [role], I want [action] in order to [benefit].";
