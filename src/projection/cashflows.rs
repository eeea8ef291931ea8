//! Projection output rows and derived figures

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use super::Granularity;

/// One step of a projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRow {
    pub date: NaiveDate,
    pub year: i32,
    /// Whole years of age at `date`
    pub age: u32,
    /// Salary for the period (yearly or monthly, including bonus)
    pub salary: f64,
    /// Salary after the coordination fee, floored at 0
    pub insurable_salary: f64,
    pub personal_contribution: f64,
    pub employer_contribution: f64,
    pub total_contribution: f64,
    /// Account value after compounding this period
    pub fund_value: f64,
    /// Injected extra ("13th") period in monthly projections
    pub is_extra_period: bool,
}

impl SimulationRow {
    /// Display label: `2025`, `2025-03` or `13th 2025`
    pub fn label(&self, granularity: Granularity) -> String {
        if self.is_extra_period {
            return format!("13th {}", self.year);
        }
        match granularity {
            Granularity::Yearly => self.year.to_string(),
            Granularity::Monthly => self.date.format("%Y-%m").to_string(),
        }
    }
}

/// Ordered projection for one contribution option
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Personal contribution option (0, 1 or 2)
    pub option: usize,
    pub granularity: Granularity,
    pub rows: Vec<SimulationRow>,
}

/// Summary figures used when comparing projections
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionMetrics {
    /// Fund value after the first step
    pub starting_value: f64,
    pub final_value: f64,
    pub total_growth: f64,
    /// Mean total contribution per row
    pub average_contribution: f64,
    /// Number of steps after the first
    pub years_to_retirement: usize,
}

impl Projection {
    pub fn empty(option: usize, granularity: Granularity) -> Self {
        Self { option, granularity, rows: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn final_value(&self) -> Option<f64> {
        self.rows.last().map(|row| row.fund_value)
    }

    /// Fund value of the row closest to `target` (first row wins ties)
    pub fn value_at(&self, target: NaiveDate) -> Option<f64> {
        let mut closest: Option<(i64, f64)> = None;
        for row in &self.rows {
            let distance = (row.date - target).num_days().abs();
            match closest {
                Some((best, _)) if distance >= best => {}
                _ => closest = Some((distance, row.fund_value)),
            }
        }
        closest.map(|(_, value)| value)
    }

    pub fn metrics(&self) -> Option<ProjectionMetrics> {
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        let contributions: f64 = self.rows.iter().map(|row| row.total_contribution).sum();

        Some(ProjectionMetrics {
            starting_value: first.fund_value,
            final_value: last.fund_value,
            total_growth: last.fund_value - first.fund_value,
            average_contribution: contributions / self.rows.len() as f64,
            years_to_retirement: self.rows.len() - 1,
        })
    }
}

/// Flat CSV record: a row tagged with its plan and option
#[derive(Serialize)]
struct CsvRecord<'a> {
    plan: &'a str,
    option: usize,
    period: String,
    date: NaiveDate,
    year: i32,
    age: u32,
    salary: f64,
    insurable_salary: f64,
    personal_contribution: f64,
    employer_contribution: f64,
    total_contribution: f64,
    fund_value: f64,
    is_extra_period: bool,
}

/// Write projections as one CSV table, options numbered from 1
pub fn write_projections_csv<W: Write>(
    writer: W,
    projections: &[(&str, &Projection)],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for &(plan, projection) in projections {
        for row in &projection.rows {
            csv_writer.serialize(CsvRecord {
                plan,
                option: projection.option + 1,
                period: row.label(projection.granularity),
                date: row.date,
                year: row.year,
                age: row.age,
                salary: row.salary,
                insurable_salary: row.insurable_salary,
                personal_contribution: row.personal_contribution,
                employer_contribution: row.employer_contribution,
                total_contribution: row.total_contribution,
                fund_value: row.fund_value,
                is_extra_period: row.is_extra_period,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: NaiveDate, fund_value: f64, total_contribution: f64) -> SimulationRow {
        SimulationRow {
            date,
            year: chrono::Datelike::year(&date),
            age: 40,
            salary: 0.0,
            insurable_salary: 0.0,
            personal_contribution: 0.0,
            employer_contribution: 0.0,
            total_contribution,
            fund_value,
            is_extra_period: false,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Projection {
        Projection {
            option: 0,
            granularity: Granularity::Monthly,
            rows: vec![
                row(date(2025, 1, 1), 100.0, 100.0),
                row(date(2025, 2, 1), 210.0, 100.0),
                row(date(2025, 3, 1), 330.0, 100.0),
            ],
        }
    }

    #[test]
    fn test_value_at_nearest_row() {
        let projection = sample();
        assert_eq!(projection.value_at(date(2024, 6, 1)), Some(100.0));
        assert_eq!(projection.value_at(date(2025, 2, 10)), Some(210.0));
        assert_eq!(projection.value_at(date(2030, 1, 1)), Some(330.0));
    }

    #[test]
    fn test_value_at_tie_takes_first_row() {
        let mut projection = sample();
        // Duplicate date as produced by an extra period row
        let mut extra = row(date(2025, 3, 1), 400.0, 70.0);
        extra.is_extra_period = true;
        projection.rows.push(extra);

        assert_eq!(projection.value_at(date(2025, 3, 1)), Some(330.0));
        // 2025-01-15 is 14 days from January and 17 from February
        assert_eq!(projection.value_at(date(2025, 1, 15)), Some(100.0));
    }

    #[test]
    fn test_value_at_empty() {
        let projection = Projection::empty(1, Granularity::Monthly);
        assert_eq!(projection.value_at(date(2025, 1, 1)), None);
        assert!(projection.metrics().is_none());
    }

    #[test]
    fn test_metrics() {
        let metrics = sample().metrics().unwrap();
        assert_eq!(metrics.starting_value, 100.0);
        assert_eq!(metrics.final_value, 330.0);
        assert_eq!(metrics.total_growth, 230.0);
        assert_eq!(metrics.average_contribution, 100.0);
        assert_eq!(metrics.years_to_retirement, 2);
    }

    #[test]
    fn test_labels() {
        let mut r = row(date(2025, 3, 1), 0.0, 0.0);
        assert_eq!(r.label(Granularity::Yearly), "2025");
        assert_eq!(r.label(Granularity::Monthly), "2025-03");
        r.is_extra_period = true;
        assert_eq!(r.label(Granularity::Monthly), "13th 2025");
    }

    #[test]
    fn test_write_csv() {
        let projection = sample();
        let mut buffer = Vec::new();
        write_projections_csv(&mut buffer, &[("Current settings", &projection)]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("plan,option,period,date,year,age"));
        assert!(lines.next().unwrap().starts_with("Current settings,1,2025-01,2025-01-01,2025,40"));
        assert_eq!(text.lines().count(), 4);
    }
}
