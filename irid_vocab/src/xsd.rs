/*!
IRIs for the [XML Schema](https://www.w3.org/TR/xmlschema11-2/) datatypes used by the literal
model, plus `int`, `decimal`, `date`, `dateTime` and `time`, which this crate does not infer from
a Rust type but still exposes as constants.
*/

use crate::namespace;

namespace! {
    "http://www.w3.org/2001/XMLSchema#",
    {
        string, "string",
        boolean, "boolean",
        float, "float",
        double, "double",
        decimal, "decimal",
        integer, "integer",
        long, "long",
        int, "int",
        short, "short",
        byte, "byte",
        date, "date",
        date_time, "dateTime",
        time, "time"
    }
}
