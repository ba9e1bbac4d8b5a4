//! Accounting service: the single entry point the CLI (and formerly the
//! GUI) talks to. Owns the database pool, the schedule configuration and
//! the read caches; constructed once at startup instead of living in
//! module-level global state.

use crate::config::Config;
use crate::core::calculator::account_day;
use crate::core::classify::classify_day;
use crate::core::infer::TypeInference;
use crate::core::parser::{read_punch_file, RawPunch};
use crate::db::cache::TtlCache;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    find_employee, insert_correction, latest_company_for, load_corrections, load_employees,
    load_punches_by_day, load_punches_range, upsert_employee, upsert_punch, UpsertOutcome,
};
use crate::errors::{AppError, AppResult};
use crate::models::correction::CorrectionLogEntry;
use crate::models::employee::Employee;
use crate::models::hours::HoursResult;
use crate::models::punch::PunchEvent;
use crate::models::schedule::{HolidaySet, WorkdaySchedule};
use crate::models::slots::{DaySlotRecord, SlotKind};
use crate::utils::date::date_range;
use chrono::{Local, NaiveDate, Offset, TimeZone};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// `HH:MM:SS`, 24h clock. Corrections not matching this are rejected
/// before anything touches the database.
const CORRECTION_TIME_PATTERN: &str = r"^([01]\d|2[0-3]):([0-5]\d):([0-5]\d)$";

/// Device export rows carrying an employee punch have a long numeric code;
/// header/trailer records carry shorter codes or long structured values.
const MIN_EMPLOYEE_CODE_LEN: usize = 10;
const MAX_PUNCH_TRAILER_LEN: usize = 8;

#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
    pub skipped_lines: usize,
    pub ignored_records: usize,
}

/// One row of the timesheet view: a classified day plus the resolved
/// employee name.
#[derive(Debug, Clone, Serialize)]
pub struct DaySheetRow {
    pub cpf: String,
    pub name: String,
    pub date: NaiveDate,
    pub record: DaySlotRecord,
}

pub struct PontoService {
    pub pool: DbPool,
    schedule_standard: WorkdaySchedule,
    schedule_extended: WorkdaySchedule,
    holidays: HolidaySet,
    correction_time: Regex,
    punch_cache: TtlCache<String, Vec<PunchEvent>>,
    roster_cache: TtlCache<String, Vec<Employee>>,
}

impl PontoService {
    /// Open the database (creating the schema when missing) and build the
    /// service from the loaded configuration.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let ttl = Duration::from_secs(cfg.cache_ttl_secs);

        Ok(Self {
            pool,
            schedule_standard: cfg.schedule(false),
            schedule_extended: cfg.schedule(true),
            holidays: cfg.holiday_set(),
            correction_time: Regex::new(CORRECTION_TIME_PATTERN).unwrap(),
            punch_cache: TtlCache::new(ttl),
            roster_cache: TtlCache::new(ttl),
        })
    }

    // ------------------------------------------------------------------
    // Import
    // ------------------------------------------------------------------

    /// Bulk import of a fixed-width punch file for one company.
    ///
    /// Parses the file, keeps only employee punch rows inside the optional
    /// date window, labels each employee-day with the inference policy and
    /// upserts everything in a single transaction.
    pub fn import_file(
        &mut self,
        path: &Path,
        company: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        policy: &dyn TypeInference,
    ) -> AppResult<ImportSummary> {
        let parsed = read_punch_file(path)?;

        let mut summary = ImportSummary {
            skipped_lines: parsed.skipped,
            ..Default::default()
        };

        // Group the importable rows by employee-day.
        let mut groups: BTreeMap<(String, NaiveDate), Vec<RawPunch>> = BTreeMap::new();
        for raw in parsed.punches {
            if !is_punch_record(&raw) || !within(raw.timestamp.date_naive(), from, to) {
                summary.ignored_records += 1;
                continue;
            }
            groups
                .entry((raw.employee_code.clone(), raw.timestamp.date_naive()))
                .or_default()
                .push(raw);
        }

        // Label each day and flatten back to punch events.
        let mut events = Vec::new();
        for ((code, _date), mut day) in groups {
            day.sort_by_key(|r| r.timestamp);

            let timestamps: Vec<_> = day.iter().map(|r| r.timestamp).collect();
            let directions = policy.infer_types(&timestamps);

            for (raw, direction) in day.into_iter().zip(directions) {
                events.push(PunchEvent::new(
                    &code,
                    raw.timestamp,
                    direction,
                    company,
                    &raw.trailer,
                ));
            }
        }

        let target = path.display().to_string();
        let (inserted, updated) = self.pool.with_transaction(|tx| {
            let mut inserted = 0;
            let mut updated = 0;
            for ev in &events {
                match upsert_punch(tx, ev)? {
                    UpsertOutcome::Inserted => inserted += 1,
                    UpsertOutcome::Updated => updated += 1,
                }
            }
            ttlog(
                tx,
                "import",
                &target,
                &format!("company {}: {} inserted, {} updated", company, inserted, updated),
            )?;
            Ok((inserted, updated))
        })?;

        summary.inserted = inserted;
        summary.updated = updated;
        Ok(summary)
    }

    // ------------------------------------------------------------------
    // Classification / timesheet view
    // ------------------------------------------------------------------

    pub fn classify_day(&mut self, cpf: &str, date: NaiveDate) -> AppResult<DaySlotRecord> {
        let punches = load_punches_by_day(&self.pool.conn, cpf, date)?;
        Ok(classify_day(cpf, date, &punches))
    }

    /// Classified slot records for every employee-day with punches in the
    /// range, sorted by employee name then date.
    pub fn day_report(
        &mut self,
        company: Option<&str>,
        cpf: Option<&str>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DaySheetRow>> {
        let punches = self.punches_in_range(company, cpf, from, to)?;
        let names = self.name_index(company)?;

        let mut by_day: BTreeMap<(String, NaiveDate), Vec<PunchEvent>> = BTreeMap::new();
        for p in punches {
            by_day.entry((p.cpf.clone(), p.date())).or_default().push(p);
        }

        let mut rows: Vec<DaySheetRow> = by_day
            .into_iter()
            .map(|((cpf, date), day)| DaySheetRow {
                name: resolve_name(&names, &cpf),
                record: classify_day(&cpf, date, &day),
                cpf,
                date,
            })
            .collect();

        rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.date.cmp(&b.date)));
        Ok(rows)
    }

    // ------------------------------------------------------------------
    // Hours accounting
    // ------------------------------------------------------------------

    /// One `HoursResult` per employee-day in the range, sorted by employee
    /// name then date. With `include_empty`, days without any punch still
    /// produce a row (a full-shortfall day); otherwise they are filtered
    /// out.
    pub fn compute_hours(
        &mut self,
        company: Option<&str>,
        cpf: Option<&str>,
        from: NaiveDate,
        to: NaiveDate,
        extended_week: bool,
        include_empty: bool,
    ) -> AppResult<Vec<HoursResult>> {
        let schedule = if extended_week {
            self.schedule_extended.clone()
        } else {
            self.schedule_standard.clone()
        };

        let punches = self.punches_in_range(company, cpf, from, to)?;
        let names = self.name_index(company)?;

        let mut by_day: BTreeMap<(String, NaiveDate), Vec<PunchEvent>> = BTreeMap::new();
        let mut employees: BTreeMap<String, String> = BTreeMap::new();
        for p in punches {
            employees
                .entry(p.cpf.clone())
                .or_insert_with(|| p.company.clone());
            by_day.entry((p.cpf.clone(), p.date())).or_default().push(p);
        }

        // Registered employees appear even when the range holds no punch
        // for them, so an absence shows up as a full-shortfall day.
        if include_empty {
            for e in self.roster(company)? {
                if cpf.map_or(true, |c| c == e.cpf) {
                    employees.entry(e.cpf.clone()).or_insert(e.company.clone());
                }
            }
        }

        let empty: Vec<PunchEvent> = Vec::new();
        let mut results = Vec::new();

        for (employee, employee_company) in &employees {
            for date in date_range(from, to) {
                let day = by_day
                    .get(&(employee.clone(), date))
                    .unwrap_or(&empty);

                if day.is_empty() && !include_empty {
                    continue;
                }

                let balance = account_day(day, date, &schedule, &self.holidays);

                results.push(HoursResult {
                    cpf: employee.clone(),
                    name: resolve_name(&names, employee),
                    company: employee_company.clone(),
                    date,
                    worked_secs: balance.worked_secs,
                    overtime_secs: balance.overtime_secs,
                    shortfall_secs: balance.shortfall_secs,
                });
            }
        }

        results.sort_by(|a, b| a.name.cmp(&b.name).then(a.date.cmp(&b.date)));
        Ok(results)
    }

    // ------------------------------------------------------------------
    // Corrections
    // ------------------------------------------------------------------

    /// Override one displayed slot for an employee-day without touching the
    /// original punch history.
    ///
    /// Appends a punch carrying the corrected timestamp (direction implied
    /// by the slot) keyed by `(cpf, timestamp)`, plus one audit entry with
    /// the previously displayed value. Both writes share one transaction.
    pub fn record_correction(
        &mut self,
        cpf: &str,
        date: NaiveDate,
        slot_name: &str,
        new_value: &str,
        actor: &str,
    ) -> AppResult<UpsertOutcome> {
        let slot = SlotKind::from_name(slot_name)
            .ok_or_else(|| AppError::InvalidSlot(slot_name.to_string()))?;

        if !self.correction_time.is_match(new_value) {
            return Err(AppError::Correction(format!(
                "time '{}' is not in HH:MM:SS format",
                new_value
            )));
        }
        let new_time = crate::utils::time::parse_required_time_hms(new_value)?;

        // Resolve the employee-day context: the register first, then the
        // punch history. Neither → nothing to attach the correction to.
        let company = match find_employee(&self.pool.conn, cpf)? {
            Some(e) => e.company,
            None => latest_company_for(&self.pool.conn, cpf)?.ok_or_else(|| {
                AppError::Correction(format!("no employee-day context for '{}'", cpf))
            })?,
        };

        let punches = load_punches_by_day(&self.pool.conn, cpf, date)?;
        let old_value = classify_day(cpf, date, &punches).display(slot);

        // Reuse the day's UTC offset when it has punches; otherwise fall
        // back to the local offset.
        let offset = punches
            .first()
            .map(|p| *p.timestamp.offset())
            .unwrap_or_else(|| Local::now().offset().fix());

        let timestamp = offset
            .from_local_datetime(&date.and_time(new_time))
            .single()
            .ok_or_else(|| AppError::InvalidTime(new_value.to_string()))?;

        let punch = PunchEvent::new(cpf, timestamp, slot.direction(), &company, "");
        let entry = CorrectionLogEntry::new(cpf, date, slot, &old_value, new_value, actor);

        self.pool.with_transaction(|tx| {
            let outcome = upsert_punch(tx, &punch)?;
            insert_correction(tx, &entry)?;
            ttlog(
                tx,
                "correct",
                cpf,
                &format!("{} {} -> {} by {}", slot.name(), old_value, new_value, actor),
            )?;
            Ok(outcome)
        })
    }

    pub fn corrections(&self, cpf: Option<&str>) -> AppResult<Vec<CorrectionLogEntry>> {
        load_corrections(&self.pool.conn, cpf)
    }

    // ------------------------------------------------------------------
    // Employee register
    // ------------------------------------------------------------------

    pub fn register_employee(
        &mut self,
        cpf: &str,
        name: &str,
        company: &str,
    ) -> AppResult<UpsertOutcome> {
        let employee = Employee {
            cpf: cpf.to_string(),
            name: name.to_string(),
            company: company.to_string(),
        };
        let outcome = upsert_employee(&self.pool.conn, &employee)?;
        ttlog(&self.pool.conn, "employee", cpf, name)?;
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Cached bulk reads
    // ------------------------------------------------------------------

    fn punches_in_range(
        &mut self,
        company: Option<&str>,
        cpf: Option<&str>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<PunchEvent>> {
        let key = format!(
            "{}|{}|{}|{}",
            company.unwrap_or("*"),
            cpf.unwrap_or("*"),
            from,
            to
        );

        if let Some(hit) = self.punch_cache.get(&key) {
            return Ok(hit);
        }

        let rows = load_punches_range(&self.pool.conn, company, cpf, from, to)?;
        self.punch_cache.put(key, rows.clone());
        Ok(rows)
    }

    fn roster(&mut self, company: Option<&str>) -> AppResult<Vec<Employee>> {
        let key = company.unwrap_or("*").to_string();

        if let Some(hit) = self.roster_cache.get(&key) {
            return Ok(hit);
        }

        let rows = load_employees(&self.pool.conn, company)?;
        self.roster_cache.put(key, rows.clone());
        Ok(rows)
    }

    fn name_index(&mut self, company: Option<&str>) -> AppResult<BTreeMap<String, String>> {
        Ok(self
            .roster(company)?
            .into_iter()
            .map(|e| (e.cpf, e.name))
            .collect())
    }
}

fn is_punch_record(raw: &RawPunch) -> bool {
    raw.employee_code.len() >= MIN_EMPLOYEE_CODE_LEN && raw.trailer.len() <= MAX_PUNCH_TRAILER_LEN
}

fn within(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}

fn resolve_name(names: &BTreeMap<String, String>, cpf: &str) -> String {
    names.get(cpf).cloned().unwrap_or_else(|| cpf.to_string())
}
