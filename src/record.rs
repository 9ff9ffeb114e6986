//! Validated connection records from raw tabular rows.

use csv::StringRecord;

/// Minutes for a single connection.
pub type Time = u64;

/// Minutes accumulated along a path; wide enough that no sum of `Time`s overflows.
pub type Distance = u128;

const STATION_A: usize = 1;
const STATION_B: usize = 2;
const TRAVEL_TIME: usize = 3;

/// One accepted row: two stations and the minutes it takes to travel between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub time: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooFewFields(usize),
    EmptyStation,
    InvalidTime,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>, time: Time) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            time,
        }
    }

    /// Field 0 (the line label) is ignored; fields 1..=3 hold `stationA, stationB, minutes`.
    pub fn from_row(row: &StringRecord) -> Result<Self, Rejection> {
        let from = field(row, STATION_A)?;
        let to = field(row, STATION_B)?;
        let time = field(row, TRAVEL_TIME)?;

        if from.is_empty() || to.is_empty() {
            return Err(Rejection::EmptyStation);
        }

        match time.parse::<Time>() {
            Ok(time) if time > 0 => Ok(Self::new(from, to, time)),
            _ => Err(Rejection::InvalidTime),
        }
    }
}

fn field(row: &StringRecord, index: usize) -> Result<&str, Rejection> {
    row.get(index)
        .map(str::trim)
        .ok_or(Rejection::TooFewFields(row.len()))
}

/// The header occupies the first physical line. A reader that drops blank lines hands
/// over a first record from a later line when that header line was empty.
fn is_header(row: &StringRecord) -> bool {
    row.position().map_or(true, |position| position.line() == 1)
}

/// Lazily turns rows into connections, dropping the header row and every malformed row.
pub fn connections<I>(rows: I) -> impl Iterator<Item = Connection>
where
    I: IntoIterator<Item = StringRecord>,
{
    rows.into_iter()
        .enumerate()
        .filter(|(index, row)| *index > 0 || !is_header(row))
        .filter_map(|(index, row)| match Connection::from_row(&row) {
            Ok(connection) => Some(connection),
            Err(reason) => {
                let line = row.position().map_or(index as u64 + 1, |position| position.line());
                tracing::debug!(line, ?reason, "skipping malformed row");
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::Position;

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn trims_station_names_and_time() {
        let connection = Connection::from_row(&row(&["Bakerloo", " Baker Street ", "Regent's Park", " 2 "]));
        assert_eq!(connection, Ok(Connection::new("Baker Street", "Regent's Park", 2)));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let connection = Connection::from_row(&row(&["Central", "Bank", "Liverpool Street", "3", "unused", "x"]));
        assert_eq!(connection, Ok(Connection::new("Bank", "Liverpool Street", 3)));
    }

    #[test]
    fn rejects_short_rows() {
        assert_eq!(
            Connection::from_row(&row(&["Central", "Bank", "Liverpool Street"])),
            Err(Rejection::TooFewFields(3))
        );
        assert_eq!(Connection::from_row(&row(&[])), Err(Rejection::TooFewFields(0)));
    }

    #[test]
    fn rejects_blank_stations() {
        assert_eq!(
            Connection::from_row(&row(&["Central", "   ", "Bank", "3"])),
            Err(Rejection::EmptyStation)
        );
        assert_eq!(
            Connection::from_row(&row(&["Central", "Bank", "", "3"])),
            Err(Rejection::EmptyStation)
        );
    }

    #[test]
    fn rejects_non_positive_or_non_numeric_times() {
        for time in ["0", "-4", "abc", "", "2.5", "18446744073709551616"] {
            assert_eq!(
                Connection::from_row(&row(&["Central", "Bank", "Holborn", time])),
                Err(Rejection::InvalidTime),
                "time {time:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_times_up_to_u64_max() {
        let connection = Connection::from_row(&row(&["Central", "Bank", "Holborn", "18446744073709551615"]));
        assert_eq!(connection, Ok(Connection::new("Bank", "Holborn", Time::MAX)));
    }

    #[test]
    fn header_is_always_skipped() {
        // A header that happens to look like valid data is still dropped.
        let rows = vec![
            row(&["Line", "A", "B", "1"]),
            row(&["Line", "C", "D", "2"]),
        ];
        let parsed: Vec<_> = connections(rows).collect();
        assert_eq!(parsed, vec![Connection::new("C", "D", 2)]);
    }

    #[test]
    fn first_row_below_line_one_is_data() {
        let mut first = row(&["Jubilee", "Stanmore", "Canons Park", "2"]);
        let mut position = Position::new();
        position.set_line(2);
        first.set_position(Some(position));

        let parsed: Vec<_> = connections(vec![first]).collect();
        assert_eq!(parsed, vec![Connection::new("Stanmore", "Canons Park", 2)]);
    }

    #[test]
    fn malformed_rows_are_dropped() {
        let rows = vec![
            row(&["Line", "From", "To", "Minutes"]),
            row(&["Jubilee", "Stanmore", "Canons Park", "2"]),
            row(&["Jubilee", "Canons Park", "Queensbury", "soon"]),
            row(&["Jubilee", "Queensbury", "Kingsbury", "2"]),
            row(&["Jubilee", "", "Wembley Park", "3"]),
            row(&["Jubilee"]),
        ];
        let parsed: Vec<_> = connections(rows).collect();
        assert_eq!(
            parsed,
            vec![
                Connection::new("Stanmore", "Canons Park", 2),
                Connection::new("Queensbury", "Kingsbury", 2),
            ]
        );
    }
}
