pub(crate) mod graph_enumerator;
pub(crate) mod oracle;
