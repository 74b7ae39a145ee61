//! Index schema for the glossary index.
//!
//! - `id`: entry ordinal (u64, indexed, stored, fast)
//! - `term`: the entry's term
//! - `definition`: definition text followed by related-context terms
//! - `aliases`: one value per alias
//! - `category`: category label
//!
//! Text fields are indexed with frequencies only; prefix matching never needs positions.

use gloss_rank::SearchField;
use tantivy::schema::{
    FAST, Field, INDEXED, IndexRecordOption, STORED, Schema, TextFieldIndexing, TextOptions,
};

use crate::analyzer::GLOSS_TOKENIZER;

/// Handles to all fields in the index schema.
#[derive(Debug, Clone)]
pub struct GlossarySchema {
    /// The underlying Tantivy schema.
    schema: Schema,
    /// Entry ordinal.
    pub id: Field,
    /// Entry term.
    pub term: Field,
    /// Definition plus related context.
    pub definition: Field,
    /// Aliases, one value each.
    pub aliases: Field,
    /// Category label.
    pub category: Field,
}

impl GlossarySchema {
    /// Creates the schema with all fields configured.
    pub fn new() -> Self {
        let mut builder = Schema::builder();

        let id = builder.add_u64_field("id", INDEXED | STORED | FAST);

        let text = TextOptions::default().set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(GLOSS_TOKENIZER)
                .set_index_option(IndexRecordOption::WithFreqs),
        );
        let term = builder.add_text_field(SearchField::Term.name(), text.clone());
        let definition = builder.add_text_field(SearchField::Definition.name(), text.clone());
        let aliases = builder.add_text_field(SearchField::Aliases.name(), text.clone());
        let category = builder.add_text_field(SearchField::Category.name(), text);

        Self {
            schema: builder.build(),
            id,
            term,
            definition,
            aliases,
            category,
        }
    }

    /// Returns a reference to the underlying Tantivy schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Tantivy field backing a searchable field.
    pub fn field(&self, field: SearchField) -> Field {
        match field {
            SearchField::Term => self.term,
            SearchField::Definition => self.definition,
            SearchField::Aliases => self.aliases,
            SearchField::Category => self.category,
        }
    }
}

impl Default for GlossarySchema {
    fn default() -> Self {
        Self::new()
    }
}
