//! Daily Scheduler
//!
//! Greedily builds one day of visits. At each step every remaining activity is
//! checked for feasibility (open now, reachable and finished before the day
//! ends) and scored by preference, travel distance, time-of-day fit and crowd
//! level. The best candidate is committed and the clock moves to its end time;
//! when nothing fits the clock advances by a fixed idle step instead.
//!
//! There is no backtracking: ties go to the candidate seen first, which keeps
//! the schedule deterministic for a given input order.

use crate::models::{
    activity::{minute_of_day, Coordinates, CrowdLevel, DayPeriod},
    itinerary::{ScheduledVisit, ScoredActivity},
};
use crate::services::distance_service::{travel_time_minutes, TravelMode};
use chrono::NaiveTime;

const BUFFER_MINUTES: f64 = 30.0;
const IDLE_STEP_MINUTES: u32 = 30;
const TRAVEL_PENALTY_MINUTES: f64 = 30.0;
const BEST_TIME_BONUS: f64 = 1.0;
const CROWD_ADJUSTMENT: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Slack added after travel and the visit itself
    pub buffer_minutes: f64,
    /// How far the clock jumps when no activity fits
    pub idle_step_minutes: u32,
    /// One point of score is lost per this many minutes of travel
    pub travel_penalty_minutes: f64,
    pub best_time_bonus: f64,
    /// Added for low crowds, subtracted for high crowds
    pub crowd_adjustment: f64,
    /// Also require the visit (with buffer) to finish before the activity closes
    pub respect_closing_time: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            buffer_minutes: BUFFER_MINUTES,
            idle_step_minutes: IDLE_STEP_MINUTES,
            travel_penalty_minutes: TRAVEL_PENALTY_MINUTES,
            best_time_bonus: BEST_TIME_BONUS,
            crowd_adjustment: CROWD_ADJUSTMENT,
            respect_closing_time: true,
        }
    }
}

impl SchedulerConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            buffer_minutes: env_or("SCHEDULER_BUFFER_MINUTES", defaults.buffer_minutes),
            idle_step_minutes: env_or("SCHEDULER_IDLE_STEP_MINUTES", defaults.idle_step_minutes),
            travel_penalty_minutes: env_or(
                "SCHEDULER_TRAVEL_PENALTY_MINUTES",
                defaults.travel_penalty_minutes,
            ),
            best_time_bonus: env_or("SCHEDULER_BEST_TIME_BONUS", defaults.best_time_bonus),
            crowd_adjustment: env_or("SCHEDULER_CROWD_ADJUSTMENT", defaults.crowd_adjustment),
            respect_closing_time: env_or(
                "SCHEDULER_RESPECT_CLOSING_TIME",
                defaults.respect_closing_time,
            ),
        }
        .validated()
    }

    /// Replace values that would break the schedule with their defaults.
    /// Visits must not end before they start and the idle clock must advance.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !(self.buffer_minutes.is_finite() && self.buffer_minutes >= 0.0) {
            log::warn!(
                "Invalid scheduler buffer_minutes {}, using {}",
                self.buffer_minutes,
                defaults.buffer_minutes
            );
            self.buffer_minutes = defaults.buffer_minutes;
        }
        if self.idle_step_minutes == 0 {
            log::warn!(
                "Invalid scheduler idle_step_minutes 0, using {}",
                defaults.idle_step_minutes
            );
            self.idle_step_minutes = defaults.idle_step_minutes;
        }
        if !(self.travel_penalty_minutes.is_finite() && self.travel_penalty_minutes > 0.0) {
            log::warn!(
                "Invalid scheduler travel_penalty_minutes {}, using {}",
                self.travel_penalty_minutes,
                defaults.travel_penalty_minutes
            );
            self.travel_penalty_minutes = defaults.travel_penalty_minutes;
        }
        if !self.best_time_bonus.is_finite() {
            log::warn!(
                "Invalid scheduler best_time_bonus {}, using {}",
                self.best_time_bonus,
                defaults.best_time_bonus
            );
            self.best_time_bonus = defaults.best_time_bonus;
        }
        if !self.crowd_adjustment.is_finite() {
            log::warn!(
                "Invalid scheduler crowd_adjustment {}, using {}",
                self.crowd_adjustment,
                defaults.crowd_adjustment
            );
            self.crowd_adjustment = defaults.crowd_adjustment;
        }

        self
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    score: f64,
    travel_time: f64,
    finish_minute: f64,
}

#[derive(Debug, Clone, Default)]
pub struct DailyScheduler {
    config: SchedulerConfig,
    travel_mode: TravelMode,
}

impl DailyScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config: config.validated(),
            travel_mode: TravelMode::Walking,
        }
    }

    pub fn with_travel_mode(mut self, travel_mode: TravelMode) -> Self {
        self.travel_mode = travel_mode;
        self
    }

    /// Build a non-overlapping, chronological schedule for one day.
    ///
    /// `start_location` defaults to the first activity's coordinates.
    ///
    /// With `respect_closing_time` set, a candidate must also finish (travel,
    /// visit and buffer) before it closes, not just be open when it starts.
    /// Turn it off for the start-time-only check.
    pub fn build_day(
        &self,
        activities: &[ScoredActivity],
        day_start: NaiveTime,
        day_end: NaiveTime,
        start_location: Option<Coordinates>,
    ) -> Vec<ScheduledVisit> {
        let mut pool: Vec<ScoredActivity> = activities.to_vec();
        let mut schedule = Vec::new();

        let Some(first) = pool.first() else {
            return schedule;
        };
        let mut current_location = start_location.unwrap_or(first.activity.coordinates);
        let mut current_minute = minute_of_day(day_start);
        let end_minute = minute_of_day(day_end);

        while !pool.is_empty() && current_minute < end_minute {
            let Some(current_time) = time_at(current_minute) else {
                break;
            };

            let Some(best) =
                self.select_next(&pool, current_time, current_location, end_minute as f64)
            else {
                current_minute += self.config.idle_step_minutes;
                continue;
            };

            let visit_end_minute = best.finish_minute.floor() as u32;
            let Some(end_time) = time_at(visit_end_minute) else {
                break;
            };

            let chosen = pool[best.index].clone();
            log::debug!(
                "Scheduled activity '{}' at {} (travel: {:.1}min, score: {:.2})",
                chosen.activity.name,
                current_time.format("%H:%M"),
                best.travel_time,
                best.score
            );

            current_location = chosen.activity.coordinates;
            current_minute = visit_end_minute;
            pool.retain(|a| a.activity.id != chosen.activity.id);

            schedule.push(ScheduledVisit {
                scored: chosen,
                travel_time: best.travel_time,
                start_time: current_time,
                end_time,
            });
        }

        schedule
    }

    /// Highest-scoring feasible activity at `current_time`; the first one seen wins ties.
    fn select_next(
        &self,
        pool: &[ScoredActivity],
        current_time: NaiveTime,
        current_location: Coordinates,
        end_minute: f64,
    ) -> Option<Candidate> {
        let current_minute = minute_of_day(current_time) as f64;
        let period = DayPeriod::from_hour(current_minute as u32 / 60);

        let mut best: Option<Candidate> = None;
        let mut best_score = f64::NEG_INFINITY;

        for (index, scored) in pool.iter().enumerate() {
            let activity = &scored.activity;
            if !activity.is_open_at(current_time) {
                continue;
            }

            let travel_time =
                travel_time_minutes(current_location, activity.coordinates, self.travel_mode);
            let total_needed = travel_time + activity.duration as f64 + self.config.buffer_minutes;
            let finish_minute = current_minute + total_needed;

            if !finish_minute.is_finite() || finish_minute > end_minute {
                continue;
            }

            if self.config.respect_closing_time
                && !self.closes_after(scored, current_time, finish_minute)
            {
                continue;
            }

            let score = self.score(scored, travel_time, period);
            if score > best_score {
                best_score = score;
                best = Some(Candidate {
                    index,
                    score,
                    travel_time,
                    finish_minute,
                });
            }
        }

        best
    }

    fn closes_after(
        &self,
        scored: &ScoredActivity,
        current_time: NaiveTime,
        finish_minute: f64,
    ) -> bool {
        let activity = &scored.activity;
        // the evening half of a window that wraps midnight stays open past day end
        if activity.wraps_midnight() && current_time >= activity.open_time {
            return true;
        }
        finish_minute <= minute_of_day(activity.close_time) as f64
    }

    fn score(&self, scored: &ScoredActivity, travel_time: f64, period: DayPeriod) -> f64 {
        let activity = &scored.activity;
        let mut score = scored.preference_score - travel_time / self.config.travel_penalty_minutes;

        if activity.best_time_of_day.matches(period) {
            score += self.config.best_time_bonus;
        }

        match activity.crowd_at(period) {
            Some(CrowdLevel::Low) => score += self.config.crowd_adjustment,
            Some(CrowdLevel::High) => score -= self.config.crowd_adjustment,
            Some(CrowdLevel::Medium) | None => {}
        }

        score
    }
}

fn time_at(minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
}
