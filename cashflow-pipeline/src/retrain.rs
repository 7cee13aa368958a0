//! Grow the vocab from categories the source export already provided.

use cashflow_core::{CategoryClassifier, UNKNOWN_CATEGORY};
use tracing::debug;

use crate::pipeline::ProcessedTable;

/// Learn `description → category` for every row whose category the current
/// vocab would not reproduce. A learned keyword is placed ahead of the keyword
/// that currently matches the description, so the next `classify` returns the
/// source category. Returns the number of new keywords.
pub fn retrain(classifier: &mut CategoryClassifier, table: &ProcessedTable) -> usize {
    let mut learned = 0;
    for txn in table.transactions() {
        if txn.category == UNKNOWN_CATEGORY || classifier.classify(&txn.description) == txn.category
        {
            continue;
        }
        let shadowing = classifier
            .matching_keyword(&txn.description)
            .map(str::to_string);
        let vocab = classifier.vocab_mut();
        let added = match shadowing {
            Some(anchor) => vocab.learn_before(&anchor, &txn.description, txn.category.as_str()),
            None => vocab.learn(&txn.description, txn.category.as_str()),
        };
        if added {
            debug!(keyword = %txn.description, category = %txn.category, "learned keyword");
            learned += 1;
        }
    }
    learned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;
    use cashflow_core::Vocab;
    use cashflow_ingest::{Processor, read_csv};

    const INTESA: &str = "\
Data,Operazione,Dettagli,Conto o carta,Contabilizzazione,Categoria ,Valuta,Importo
03/15/2023,Esselunga Milano,pos,Conto,Contabilizzato,Alimentari,EUR,-20
03/16/2023,Farmacia Centrale,pos,Conto,Contabilizzato,Salute,EUR,-8
03/17/2023,Farmacia Centrale,pos,Conto,Contabilizzato,Salute,EUR,-9
03/18/2023,Bonifico,pos,Conto,Contabilizzato,,EUR,-9
";

    #[test]
    fn test_learns_only_new_source_categories() {
        let mut c = CategoryClassifier::new(Vocab::from_pairs([("esselunga", "alimentari")]));
        let table = Pipeline::new(Processor::Intesa, &c)
            .run(read_csv(INTESA.as_bytes()).unwrap())
            .unwrap();

        let learned = retrain(&mut c, &table);
        assert_eq!(learned, 1);
        assert_eq!(c.vocab().len(), 2);
        assert_eq!(c.classify("farmacia centrale"), "salute");
        // unknown rows teach nothing
        assert_eq!(c.classify("bonifico"), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_learned_keyword_beats_existing_match() {
        let mut c = CategoryClassifier::new(Vocab::from_pairs([
            ("netflix", "subscriptions"),
            ("esselunga", "groceries"),
        ]));
        let table = Pipeline::new(Processor::Intesa, &c)
            .run(read_csv(INTESA.as_bytes()).unwrap())
            .unwrap();

        assert_eq!(retrain(&mut c, &table), 2);
        assert_eq!(c.classify("Esselunga Milano"), "alimentari");
        assert_eq!(c.classify("farmacia centrale"), "salute");
        // other descriptions keep the broader keyword
        assert_eq!(c.classify("esselunga roma"), "groceries");
        assert_eq!(c.classify("netflix.com"), "subscriptions");

        // a second pass has nothing left to learn
        assert_eq!(retrain(&mut c, &table), 0);
    }

    #[test]
    fn test_retrain_is_idempotent() {
        let mut c = CategoryClassifier::default();
        let table = Pipeline::new(Processor::Intesa, &c)
            .run(read_csv(INTESA.as_bytes()).unwrap())
            .unwrap();
        assert_eq!(retrain(&mut c, &table), 2);
        assert_eq!(retrain(&mut c, &table), 0);
    }
}
