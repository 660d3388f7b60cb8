//! Embedded dataset documents, one comparison per file under `data/`
//!
//! Keep the table sorted by file name; a new pair needs a new entry here.

pub(crate) static DOCUMENTS: &[(&str, &str)] = &[
    ("csharp-python.yaml", include_str!("../data/csharp-python.yaml")),
    ("go-rust.yaml", include_str!("../data/go-rust.yaml")),
    ("java-kotlin.yaml", include_str!("../data/java-kotlin.yaml")),
    ("javascript-typescript.yaml", include_str!("../data/javascript-typescript.yaml")),
    ("php-javascript.yaml", include_str!("../data/php-javascript.yaml")),
    ("python-javascript.yaml", include_str!("../data/python-javascript.yaml")),
    ("python-rust.yaml", include_str!("../data/python-rust.yaml")),
    ("ruby-python.yaml", include_str!("../data/ruby-python.yaml")),
];
