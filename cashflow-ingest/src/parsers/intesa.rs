//! Intesa Sanpaolo movements export (Italian headers).
//!
//! Expected layout (note the trailing space in "Categoria "):
//!   Data,Operazione,Dettagli,Conto o carta,Contabilizzazione,Categoria ,Valuta,Importo
//!   03/15/2023,"PAGAMENTO POS ESSELUNGA, MILANO",...,Conto,Contabilizzato,"Spesa, alimentari",EUR,"-1,234.56"

use cashflow_core::{Frame, Result};
use tracing::debug;

use super::{is_nonzero, lowercase, strip_commas, to_number, to_timestamp};

const DATE_FORMAT: &str = "%m/%d/%Y";
const MISTYPED_CATEGORY: &str = "Categoria ";

const DROPPED_COLUMNS: [&str; 4] = ["Dettagli", "Conto o carta", "Contabilizzazione", "Valuta"];

const RENAMES: [(&str, &str); 4] = [
    ("Data", "Date"),
    ("Operazione", "Description"),
    ("Importo", "Amount"),
    ("Categoria", "Category"),
];

pub fn convert(mut frame: Frame) -> Result<Frame> {
    let total = frame.len();

    if frame.has_column(MISTYPED_CATEGORY) {
        frame.rename_column(MISTYPED_CATEGORY, "Categoria")?;
    }

    frame.map_column("Importo", |c| to_number("Importo", c))?;
    frame.map_column("Operazione", strip_commas)?;
    frame.map_column("Categoria", strip_commas)?;

    frame.map_column("Operazione", lowercase)?;
    frame.map_column("Categoria", lowercase)?;

    let zero = frame.retain_where("Importo", is_nonzero)?;

    frame.drop_columns(&DROPPED_COLUMNS)?;

    frame.map_column("Data", |c| to_timestamp("Data", c, DATE_FORMAT))?;

    frame.rename_columns(&RENAMES)?;

    debug!(total, kept = frame.len(), zero, "intesa: converted");
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_csv;
    use cashflow_core::{Cell, Error};
    use rust_decimal::Decimal;

    const HEADER: &str =
        "Data,Operazione,Dettagli,Conto o carta,Contabilizzazione,Categoria ,Valuta,Importo\n";

    fn frame(rows: &str) -> Frame {
        read_csv(format!("{HEADER}{rows}").as_bytes()).unwrap()
    }

    #[test]
    fn test_thousands_separator_amount() {
        let f = frame(
            "03/15/2023,\"PAGAMENTO POS ESSELUNGA, MILANO\",pos,Conto,Contabilizzato,\"Spesa, Alimentari\",EUR,\"1,234.56\"\n",
        );
        let out = convert(f).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.get(0, "Amount"), Some(&Cell::Number(Decimal::new(123456, 2))));
        assert_eq!(
            out.get(0, "Description"),
            Some(&Cell::text("pagamento pos esselunga milano"))
        );
        assert_eq!(out.get(0, "Category"), Some(&Cell::text("spesa alimentari")));
        assert_eq!(out.get(0, "Date").map(|c| c.to_string()).as_deref(), Some("2023-03-15 00:00:00"));
    }

    #[test]
    fn test_output_columns() {
        let f = frame("01/02/2023,Bonifico,x,Conto,Contabilizzato,Entrate,EUR,100\n");
        let out = convert(f).unwrap();
        let mut headers = out.headers().to_vec();
        headers.sort();
        assert_eq!(headers, vec!["Amount", "Category", "Date", "Description"]);
    }

    #[test]
    fn test_zero_amount_dropped() {
        let f = frame(concat!(
            "01/02/2023,Storno,x,Conto,Contabilizzato,Altro,EUR,0\n",
            "01/03/2023,Spesa,x,Conto,Contabilizzato,Altro,EUR,-12.50\n",
        ));
        let out = convert(f).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.get(0, "Description"), Some(&Cell::text("spesa")));
    }

    #[test]
    fn test_accepts_corrected_category_header() {
        let data = "Data,Operazione,Dettagli,Conto o carta,Contabilizzazione,Categoria,Valuta,Importo\n\
                    01/02/2023,Bonifico,x,Conto,Contabilizzato,Entrate,EUR,100\n";
        let out = convert(read_csv(data.as_bytes()).unwrap()).unwrap();
        assert_eq!(out.get(0, "Category"), Some(&Cell::text("entrate")));
    }

    #[test]
    fn test_day_first_date_rejected() {
        let f = frame("15/03/2023,Spesa,x,Conto,Contabilizzato,Altro,EUR,-1\n");
        let err = convert(f).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref column, .. } if column == "Data"));
    }
}
