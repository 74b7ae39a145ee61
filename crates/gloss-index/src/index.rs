//! The in-memory glossary index.

use gloss_corpus::{Corpus, EntryId, build_context_map, context_text};
use gloss_rank::{CandidateIndex, FieldHits, SearchField};
use tantivy::{
    DocAddress, Index, IndexReader, IndexWriter, ReloadPolicy, Score, TantivyDocument, Term,
    collector::TopDocs,
    query::{BooleanQuery, BoostQuery, Occur, Query, RegexQuery, TermQuery},
    schema::{Field, IndexRecordOption, Value},
    tokenizer::TextAnalyzer,
};
use tracing::debug;

use crate::{
    analyzer::{GLOSS_TOKENIZER, build_analyzer, tokenize},
    error::IndexError,
    schema::GlossarySchema,
};

/// Heap size for the index writer (50 MB).
const WRITER_HEAP_SIZE: usize = 50_000_000;

/// Boost on whole-token matches, which rank ahead of prefix-only matches.
const EXACT_TOKEN_BOOST: Score = 4.0;

/// Forward-prefix index over a corpus, held entirely in RAM.
///
/// Every query token must be a prefix of some indexed token in the searched field, so
/// `proc` matches "process" and `ao proc` matches the alias "ao process". Entries
/// containing a query token as a whole token come first, so an exact term is never
/// crowded out by longer terms that merely share its prefix. Equal scores fall back
/// to entry order.
pub struct GlossaryIndex {
    /// Reader over the committed entries.
    reader: IndexReader,
    /// Schema with field handles.
    schema: GlossarySchema,
    /// Analyzer applied to query strings.
    analyzer: TextAnalyzer,
}

impl GlossaryIndex {
    /// Indexes every entry of `corpus`.
    ///
    /// The definition field also receives the entry's related-context terms, so an
    /// entry can be found through the vocabulary of entries that mention it.
    pub fn build(corpus: &Corpus) -> Result<Self, IndexError> {
        let schema = GlossarySchema::new();
        let index = Index::create_in_ram(schema.schema().clone());
        let analyzer = build_analyzer();
        index
            .tokenizers()
            .register(GLOSS_TOKENIZER, analyzer.clone());

        let mut writer: IndexWriter = index
            .writer_with_num_threads(1, WRITER_HEAP_SIZE)
            .map_err(|e| IndexError::build(&e))?;

        let context = build_context_map(corpus);
        for (id, entry) in corpus.iter() {
            let mut doc = TantivyDocument::new();
            doc.add_u64(schema.id, id.index() as u64);
            doc.add_text(schema.term, &entry.term);

            let related = context_text(&context, id);
            if related.is_empty() {
                doc.add_text(schema.definition, &entry.definition);
            } else {
                doc.add_text(schema.definition, format!("{} {related}", entry.definition));
            }

            for alias in &entry.aliases {
                doc.add_text(schema.aliases, alias);
            }
            doc.add_text(schema.category, &entry.category);

            writer
                .add_document(doc)
                .map_err(|e| IndexError::build(&e))?;
        }
        writer.commit().map_err(|e| IndexError::build(&e))?;

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(|e| IndexError::build(&e))?;

        debug!(entries = corpus.len(), "built glossary index");

        Ok(Self {
            reader,
            schema,
            analyzer,
        })
    }

    /// Number of indexed entries.
    pub fn len(&self) -> u64 {
        self.reader.searcher().num_docs()
    }

    /// Returns true if no entries are indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Requires every token to prefix-match within `field`, boosting whole-token matches.
    fn prefix_query(field: Field, tokens: &[String]) -> Result<BooleanQuery, IndexError> {
        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::with_capacity(tokens.len() * 2);
        for token in tokens {
            // Tokens are alphanumeric after analysis, so they need no escaping
            let pattern = format!("{token}.*");
            let prefix = RegexQuery::from_pattern(&pattern, field)
                .map_err(|e| IndexError::pattern(&pattern, &e))?;
            clauses.push((Occur::Must, Box::new(prefix) as Box<dyn Query>));

            let exact = TermQuery::new(
                Term::from_field_text(field, token),
                IndexRecordOption::WithFreqs,
            );
            let boosted = BoostQuery::new(Box::new(exact), EXACT_TOKEN_BOOST);
            clauses.push((Occur::Should, Box::new(boosted) as Box<dyn Query>));
        }
        Ok(BooleanQuery::new(clauses))
    }

    /// Runs a query against one field and returns up to `limit` ids, best first.
    fn search_field(
        &self,
        field: SearchField,
        tokens: &[String],
        limit: usize,
    ) -> Result<Vec<EntryId>, IndexError> {
        let query = Self::prefix_query(self.schema.field(field), tokens)?;
        let searcher = self.reader.searcher();

        let mut top: Vec<(Score, DocAddress)> = searcher
            .search(&query, &TopDocs::with_limit(limit))
            .map_err(|e| IndexError::search(field.name(), &e))?;
        top.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        let mut ids = Vec::with_capacity(top.len());
        for (_, address) in top {
            let doc: TantivyDocument = searcher
                .doc(address)
                .map_err(|e| IndexError::search(field.name(), &e))?;
            if let Some(id) = doc.get_first(self.schema.id).and_then(|v| v.as_u64()) {
                ids.push(EntryId::new(id as usize));
            }
        }
        Ok(ids)
    }
}

impl CandidateIndex for GlossaryIndex {
    type Error = IndexError;

    fn search(
        &self,
        query: &str,
        fields: &[SearchField],
        limit: usize,
    ) -> Result<Vec<FieldHits>, IndexError> {
        let tokens = tokenize(&mut self.analyzer.clone(), query);

        fields
            .iter()
            .map(|&field| {
                let ids = if tokens.is_empty() || limit == 0 {
                    Vec::new()
                } else {
                    self.search_field(field, &tokens, limit)?
                };
                Ok(FieldHits { field, ids })
            })
            .collect()
    }
}
