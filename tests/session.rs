//! End-to-end session tests.
//!
//! Sessions are driven by scripted answers against small CSV fixtures
//! written into a temporary data directory.

use std::io::Write;
use std::path::Path;

use bikeshare::cli::{
    ScriptedPrompt, Session, SessionEnd, CITY_PROMPT, NEXT_PROMPT, RAW_PROMPT, RESTART_PROMPT,
};
use bikeshare::data::{load, schema, City, CityRegistry, DayFilter, MonthFilter, TripFilter};
use bikeshare::stats::UserStats;
use bikeshare::Error;

const CHICAGO_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";
const WASHINGTON_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

/// Chicago trips spread over several months and weekdays.
///
/// March 2017: the 6th, 13th and 20th are Mondays.
const CHICAGO_ROWS: &[&str] = &[
    "1423854,2017-03-06 08:07:57,2017-03-06 08:20:53,776,Canal St & Madison St,Clinton St & Washington Blvd,Subscriber,Male,1984.0",
    "955915,2017-03-13 17:30:10,2017-03-13 17:41:02,652,Canal St & Madison St,Clark St & Lake St,Subscriber,Female,1992.0",
    "9031,2017-03-20 09:00:00,2017-03-20 09:09:00,540,Clinton St & Washington Blvd,Canal St & Madison St,Customer,,",
    "304487,2017-03-14 12:00:00,2017-03-14 12:30:00,1800,Canal St & Madison St,Clark St & Lake St,Subscriber,Male,1979.0",
    "45207,2017-03-18 15:00:00,2017-03-18 15:20:00,1200,Lake Shore Dr & Monroe St,Streeter Dr & Grand Ave,Customer,,",
    "1473887,2017-04-03 08:15:00,2017-04-03 08:25:00,600,Canal St & Madison St,Clark St & Lake St,Subscriber,Female,1988.0",
    "961916,2017-01-02 07:55:00,2017-01-02 08:05:00,600,Clark St & Lake St,Canal St & Madison St,Subscriber,Male,1990.0",
    "65924,2017-06-05 18:00:00,2017-06-05 18:45:00,2700,Streeter Dr & Grand Ave,Lake Shore Dr & Monroe St,Customer,Female,2000.0",
];

const WASHINGTON_ROWS: &[&str] = &[
    "1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber",
    "482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber",
    "1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Subscriber",
    "665458,2017-04-02 07:48:35,2017-04-02 08:19:03,1827.341,Constitution Ave & 2nd St NW/DOL,M St & Pennsylvania Ave NW,Customer",
];

fn write_csv(dir: &Path, file: &str, header: &str, rows: &[&str]) {
    let mut contents = format!("{header}\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    std::fs::write(dir.join(file), contents).unwrap();
}

fn data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "chicago.csv", CHICAGO_HEADER, CHICAGO_ROWS);
    write_csv(dir.path(), "washington.csv", WASHINGTON_HEADER, WASHINGTON_ROWS);
    dir
}

fn run(dir: &Path, answers: &[&str]) -> (SessionEnd, ScriptedPrompt, String) {
    let prompt = ScriptedPrompt::new(answers.iter().copied());
    let mut session = Session::new(CityRegistry::new(dir), prompt, Vec::new());
    let end = session.run().unwrap();
    let (prompt, out) = session.into_parts();
    (end, prompt, String::from_utf8(out).unwrap())
}

#[test]
fn test_washington_has_no_demographics() {
    let dir = data_dir();
    let (end, prompt, out) = run(dir.path(), &["washington", "all", "all", "no", "no"]);

    assert_eq!(end, SessionEnd::Finished);
    assert_eq!(prompt.remaining(), 0);
    assert!(out.contains("Subscriber  3"));
    assert!(out.contains("Customer    1"));
    assert!(out.contains("This dataset does not have the column called 'Gender'"));
    assert!(out.contains("This dataset does not have the column called 'Birth Year'"));
    assert!(!out.contains("Error:"));
}

#[test]
fn test_chicago_march_monday() {
    let dir = data_dir();
    let registry = CityRegistry::new(dir.path());
    let filter = TripFilter::new(City::Chicago, MonthFilter::Month(3), DayFilter::Day(0));

    let table = load(&registry, &filter).unwrap();
    assert_eq!(table.num_rows(), 3);

    let days = table.strings(schema::DAY_OF_WEEK).unwrap();
    assert!(days.iter().all(|d| d == Some("Monday")));

    let starts = table.start_times().unwrap();
    for i in 0..table.num_rows() {
        let ts = starts.value_as_datetime(i).unwrap();
        assert_eq!(ts.format("%m").to_string(), "03");
        assert_eq!(ts.format("%A").to_string(), "Monday");
    }
}

#[test]
fn test_chicago_march_monday_session_reports() {
    let dir = data_dir();
    let (_, _, out) = run(dir.path(), &["chicago", "march", "monday", "no", "no"]);

    assert!(out.contains("Most Popular Month: 3"));
    assert!(out.contains("Most Popular Start Station: Canal St & Madison St"));
    assert!(out.contains("Total travel Time: 1968"));
    assert!(out.contains("Earliest birth year: '1984'."));
}

#[test]
fn test_day_without_month_is_not_filtered() {
    let dir = data_dir();
    let registry = CityRegistry::new(dir.path());

    let all = load(
        &registry,
        &TripFilter::new(City::Chicago, MonthFilter::All, DayFilter::All),
    )
    .unwrap();
    let sunday_only = load(
        &registry,
        &TripFilter::new(City::Chicago, MonthFilter::All, DayFilter::Day(6)),
    )
    .unwrap();

    assert_eq!(all.num_rows(), CHICAGO_ROWS.len());
    assert_eq!(sunday_only.num_rows(), all.num_rows());
}

#[test]
fn test_every_valid_filter_combination() {
    let dir = data_dir();
    let registry = CityRegistry::new(dir.path());

    for city in [City::Chicago, City::Washington] {
        for month in 0..=6u32 {
            for day in 0..=7usize {
                let month_filter = if month == 0 { MonthFilter::All } else { MonthFilter::Month(month) };
                let day_filter = if day == 7 { DayFilter::All } else { DayFilter::Day(day) };
                let filter = TripFilter::new(city, month_filter, day_filter);
                let table = load(&registry, &filter).unwrap();

                let starts = table.start_times().unwrap();
                for i in 0..table.num_rows() {
                    let ts = starts.value_as_datetime(i).unwrap();
                    if let Some(m) = month_filter.number() {
                        assert_eq!(ts.format("%-m").to_string(), m.to_string());
                    }
                    if filter.applies_day() {
                        assert_eq!(Some(ts.format("%A").to_string()), day_filter.title_name());
                    }
                }

                if table.is_empty() {
                    continue;
                }
                // Breakdown counts always cover every row
                let stats = UserStats::compute(&table).unwrap();
                let total: usize = stats.user_types.iter().map(|(_, c)| c).sum();
                assert_eq!(total, table.num_rows());
            }
        }
    }
}

#[test]
fn test_raw_browser_in_session() {
    let dir = tempfile::tempdir().unwrap();
    let rows: Vec<String> = (0..12)
        .map(|i| {
            format!(
                "{i},2017-02-{:02} 10:00:00,2017-02-{:02} 10:10:00,600,Station {i},Dock {i},Subscriber",
                i + 1,
                i + 1
            )
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    write_csv(dir.path(), "washington.csv", WASHINGTON_HEADER, &rows);

    let (end, prompt, out) = run(
        dir.path(),
        &["washington", "all", "all", "yes", "yes", "yes", "yes", "no"],
    );

    assert_eq!(end, SessionEnd::Finished);
    assert_eq!(
        prompt.asked()[3..].to_vec(),
        vec![RAW_PROMPT, NEXT_PROMPT, RAW_PROMPT, NEXT_PROMPT, RESTART_PROMPT]
    );
    assert!(out.contains("Station 10 "));
    // The final page stops one short of the last row
    assert!(!out.contains("Station 11 "));
    assert!(out.contains("You've reached the end of the data"));
}

#[test]
fn test_restart_runs_another_pass() {
    let dir = data_dir();
    let (end, prompt, out) = run(
        dir.path(),
        &["washington", "all", "all", "no", "Y", "chicago", "june", "all", "no", "nope"],
    );

    assert_eq!(end, SessionEnd::Finished);
    assert_eq!(prompt.asked().iter().filter(|q| q.as_str() == CITY_PROMPT).count(), 2);
    assert!(out.contains("Selected data file for washington"));
    assert!(out.contains("Selected data file for chicago"));
    assert!(out.contains("Most common birth year: '2000'."));
}

#[test]
fn test_missing_dataset_then_restart() {
    let dir = data_dir();
    let (end, _, out) = run(
        dir.path(),
        &["new york city", "all", "all", "yes", "washington", "all", "all", "no", "no"],
    );

    assert_eq!(end, SessionEnd::Finished);
    assert!(out.contains("Error: Dataset unavailable"));
    assert!(out.contains("new_york_city.csv"));
    assert!(out.contains("Calculating The Most Frequent Times of Travel..."));
}

#[test]
fn test_gzip_dataset() {
    use flate2::write::GzEncoder;

    let dir = tempfile::tempdir().unwrap();
    let mut contents = format!("{WASHINGTON_HEADER}\n");
    for row in WASHINGTON_ROWS {
        contents.push_str(row);
        contents.push('\n');
    }
    let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    std::fs::write(dir.path().join("washington.csv.gz"), encoder.finish().unwrap()).unwrap();

    let registry = CityRegistry::new(dir.path());
    let filter = TripFilter::new(City::Washington, MonthFilter::All, DayFilter::All);
    let table = load(&registry, &filter).unwrap();
    assert_eq!(table.num_rows(), WASHINGTON_ROWS.len());
}

#[test]
fn test_corrupt_dataset() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(
        dir.path(),
        "chicago.csv",
        CHICAGO_HEADER,
        &["1,yesterday,2017-03-06 08:20:53,776,A,B,Subscriber,Male,1984.0"],
    );
    let registry = CityRegistry::new(dir.path());
    let filter = TripFilter::new(City::Chicago, MonthFilter::All, DayFilter::All);

    let err = load(&registry, &filter).unwrap_err();
    assert!(matches!(err, Error::DatasetUnavailable { .. }));
    assert!(err.is_pass_level());
}
