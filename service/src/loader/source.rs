//! Subject/predicate-indexed lookups over a triple store

use oxigraph::model::{NamedNodeRef, NamedOrBlankNode, Term};
use oxigraph::store::Store;

/// Read-only view of a triple store returning plain term values
///
/// Only named nodes and literals produce a value; blank nodes are dropped.
/// Results come back in store iteration order, which callers must not rely on.
pub trait TripleSource {
    /// Values of every `(subject, predicate, ?)` match
    fn objects(&self, subject: &str, predicate: &str) -> Vec<String>;

    /// IRIs of every named `(?, predicate, object)` subject, where `object` is an IRI
    fn subjects(&self, predicate: &str, object: &str) -> Vec<String>;
}

impl<T: TripleSource + ?Sized> TripleSource for &T {
    fn objects(&self, subject: &str, predicate: &str) -> Vec<String> {
        (**self).objects(subject, predicate)
    }

    fn subjects(&self, predicate: &str, object: &str) -> Vec<String> {
        (**self).subjects(predicate, object)
    }
}

fn term_value(term: &Term) -> Option<String> {
    match term {
        Term::NamedNode(n) => Some(n.as_str().to_string()),
        Term::Literal(l) => Some(l.value().to_string()),
        _ => None,
    }
}

impl TripleSource for Store {
    fn objects(&self, subject: &str, predicate: &str) -> Vec<String> {
        let (Ok(subject), Ok(predicate)) = (NamedNodeRef::new(subject), NamedNodeRef::new(predicate))
        else {
            return Vec::new();
        };

        self.quads_for_pattern(Some(subject.into()), Some(predicate), None, None)
            .filter_map(std::result::Result::ok)
            .filter_map(|quad| term_value(&quad.object))
            .collect()
    }

    fn subjects(&self, predicate: &str, object: &str) -> Vec<String> {
        let (Ok(predicate), Ok(object)) = (NamedNodeRef::new(predicate), NamedNodeRef::new(object))
        else {
            return Vec::new();
        };

        self.quads_for_pattern(None, Some(predicate), Some(object.into()), None)
            .filter_map(std::result::Result::ok)
            .filter_map(|quad| match quad.subject {
                NamedOrBlankNode::NamedNode(n) => Some(n.into_string()),
                _ => None,
            })
            .collect()
    }
}
