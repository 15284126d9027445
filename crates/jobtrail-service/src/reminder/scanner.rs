//! Date rules that decide which reminders are due today.

use chrono::{Days, NaiveDate};

use jobtrail_entity::application::{Application, ApplicationStatus};

/// One reminder due for one application, produced by a single rule.
#[derive(Debug, Clone)]
pub enum ReminderEvent {
    /// The application's interview falls on tomorrow's calendar date.
    InterviewTomorrow {
        /// The matching application.
        application: Application,
    },
    /// The application's deadline falls three calendar days out.
    DeadlineApproaching {
        /// The matching application.
        application: Application,
        /// Signed day difference between the deadline and today.
        days_remaining: i64,
    },
    /// The application was submitted seven calendar days ago with no
    /// status movement.
    FollowUpDue {
        /// The matching application.
        application: Application,
        /// Day difference between today and the submission date.
        days_since_applied: i64,
    },
}

impl ReminderEvent {
    /// The application this event was produced for.
    pub fn application(&self) -> &Application {
        match self {
            Self::InterviewTomorrow { application }
            | Self::DeadlineApproaching { application, .. }
            | Self::FollowUpDue { application, .. } => application,
        }
    }
}

/// Evaluates the three reminder rules against an application snapshot.
///
/// The scanner is a pure function of `(snapshot, today)`: it holds no
/// state, performs no deduplication, and never mutates applications. All
/// comparisons are exact calendar-day matches, so running the scan twice
/// on the same day yields the same events twice.
pub struct ReminderScanner;

impl ReminderScanner {
    /// Produce every `(application, rule)` pair due on `today`. Ordering
    /// across rules is insignificant; events are processed independently.
    pub fn scan(applications: &[Application], today: NaiveDate) -> Vec<ReminderEvent> {
        let mut events = Vec::new();
        for app in applications {
            if Self::interview_due(app, today) {
                events.push(ReminderEvent::InterviewTomorrow {
                    application: app.clone(),
                });
            }
            if let Some(days_remaining) = Self::deadline_due(app, today) {
                events.push(ReminderEvent::DeadlineApproaching {
                    application: app.clone(),
                    days_remaining,
                });
            }
            if let Some(days_since_applied) = Self::follow_up_due(app, today) {
                events.push(ReminderEvent::FollowUpDue {
                    application: app.clone(),
                    days_since_applied,
                });
            }
        }
        events
    }

    /// Interview rule: interview set, tomorrow, and the application is at
    /// an interview-bearing stage.
    fn interview_due(app: &Application, today: NaiveDate) -> bool {
        let Some(interview_date) = app.interview_date else {
            return false;
        };
        let tomorrow = today + Days::new(1);
        interview_date.date_naive() == tomorrow
            && matches!(
                app.status,
                ApplicationStatus::Interview | ApplicationStatus::TechnicalTest
            )
    }

    /// Deadline rule: deadline set, exactly three days out, and the
    /// application has not already concluded.
    fn deadline_due(app: &Application, today: NaiveDate) -> Option<i64> {
        let deadline = app.deadline?;
        let eligible = matches!(
            app.status,
            ApplicationStatus::Applied
                | ApplicationStatus::Interview
                | ApplicationStatus::TechnicalTest
        );
        if eligible && deadline == today + Days::new(3) {
            Some((deadline - today).num_days())
        } else {
            None
        }
    }

    /// Follow-up rule: still in Applied, submitted exactly seven days ago.
    fn follow_up_due(app: &Application, today: NaiveDate) -> Option<i64> {
        if app.status == ApplicationStatus::Applied && app.applied_date + Days::new(7) == today {
            Some((today - app.applied_date).num_days())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn application(status: ApplicationStatus) -> Application {
        Application {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            position: "Backend Engineer".to_string(),
            company: "Initech".to_string(),
            status,
            applied_date: date(2025, 5, 1),
            interview_date: None,
            deadline: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn interview_tomorrow_fires_for_interview_stage() {
        let mut app = application(ApplicationStatus::Interview);
        app.interview_date = Some(Utc.with_ymd_and_hms(2025, 6, 10, 14, 0, 0).unwrap());

        let events = ReminderScanner::scan(std::slice::from_ref(&app), date(2025, 6, 9));

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], ReminderEvent::InterviewTomorrow { .. }));
        assert_eq!(events[0].application().id, app.id);
    }

    #[test]
    fn interview_rule_ignores_other_stages_and_dates() {
        let mut wrong_stage = application(ApplicationStatus::Applied);
        wrong_stage.interview_date = Some(Utc.with_ymd_and_hms(2025, 6, 10, 14, 0, 0).unwrap());

        let mut wrong_day = application(ApplicationStatus::Interview);
        wrong_day.interview_date = Some(Utc.with_ymd_and_hms(2025, 6, 11, 9, 0, 0).unwrap());

        let events = ReminderScanner::scan(&[wrong_stage, wrong_day], date(2025, 6, 9));
        assert!(events.is_empty());
    }

    #[test]
    fn deadline_three_days_out_carries_days_remaining() {
        let mut app = application(ApplicationStatus::Applied);
        app.deadline = Some(date(2025, 6, 12));

        let events = ReminderScanner::scan(std::slice::from_ref(&app), date(2025, 6, 9));

        assert_eq!(events.len(), 1);
        match &events[0] {
            ReminderEvent::DeadlineApproaching { days_remaining, .. } => {
                assert_eq!(*days_remaining, 3);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn deadline_rule_skips_concluded_applications() {
        let mut app = application(ApplicationStatus::Offer);
        app.deadline = Some(date(2025, 6, 12));

        let events = ReminderScanner::scan(std::slice::from_ref(&app), date(2025, 6, 9));
        assert!(events.is_empty());
    }

    #[test]
    fn follow_up_fires_seven_days_after_applying() {
        let mut app = application(ApplicationStatus::Applied);
        app.applied_date = date(2025, 6, 2);

        let events = ReminderScanner::scan(std::slice::from_ref(&app), date(2025, 6, 9));

        assert_eq!(events.len(), 1);
        match &events[0] {
            ReminderEvent::FollowUpDue {
                days_since_applied, ..
            } => assert_eq!(*days_since_applied, 7),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn follow_up_requires_applied_status() {
        let mut app = application(ApplicationStatus::Interview);
        app.applied_date = date(2025, 6, 2);

        let events = ReminderScanner::scan(std::slice::from_ref(&app), date(2025, 6, 9));
        assert!(events.is_empty());
    }

    #[test]
    fn one_application_can_match_multiple_rules() {
        let mut app = application(ApplicationStatus::Interview);
        app.interview_date = Some(Utc.with_ymd_and_hms(2025, 6, 10, 14, 0, 0).unwrap());
        app.deadline = Some(date(2025, 6, 12));

        let events = ReminderScanner::scan(std::slice::from_ref(&app), date(2025, 6, 9));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn scan_is_deterministic_for_the_same_inputs() {
        let mut app = application(ApplicationStatus::Applied);
        app.applied_date = date(2025, 6, 2);
        let apps = vec![app];

        let first = ReminderScanner::scan(&apps, date(2025, 6, 9));
        let second = ReminderScanner::scan(&apps, date(2025, 6, 9));
        assert_eq!(first.len(), second.len());
    }
}
