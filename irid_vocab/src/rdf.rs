/*!
IRIs for the [RDF](https://www.w3.org/TR/rdf11-concepts/) namespace terms this crate needs.
*/

use crate::namespace;

namespace! {
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    {
        lang_string, "langString"
    }
}
