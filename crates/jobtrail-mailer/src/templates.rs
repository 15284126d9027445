//! Embedded email templates, one family per notification kind group.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Rendering is non-strict: context keys the factory did not populate are
//! normalized to "N/A" by the dispatcher before rendering, so a sparse
//! metadata map never fails a send.

use handlebars::Handlebars;

use jobtrail_core::error::{AppError, ErrorKind};
use jobtrail_core::result::AppResult;
use jobtrail_entity::notification::NotificationKind;

/// A rendered subject/HTML/text triple.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Plaintext body.
    pub text: String,
}

/// Map a notification kind to its template family. Deadline warnings and
/// follow-ups share the reminder template; anything without a dedicated
/// template falls back to the general one.
fn template_name(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::InterviewScheduled | NotificationKind::InterviewReminder => "interview",
        NotificationKind::ApplicationDeadlineApproaching | NotificationKind::FollowUpReminder => {
            "reminder"
        }
        NotificationKind::ApplicationStatusChanged => "status_changed",
        _ => "general",
    }
}

const INTERVIEW_SUBJECT: &str = "{{title}}: {{position}} at {{company}}";
const INTERVIEW_HTML: &str = "\
<html><body>\
<p>Hi {{user.name}},</p>\
<p>{{message}}</p>\
<table>\
<tr><td>Position</td><td>{{position}}</td></tr>\
<tr><td>Company</td><td>{{company}}</td></tr>\
<tr><td>Interview</td><td>{{interview_date}}</td></tr>\
</table>\
<p><a href=\"{{action_url}}\">View application</a></p>\
<p>JobTrail</p>\
</body></html>";
const INTERVIEW_TEXT: &str = "\
Hi {{user.name}},

{{message}}

Position: {{position}}
Company: {{company}}
Interview: {{interview_date}}

View application: {{action_url}}

JobTrail";

const REMINDER_SUBJECT: &str = "{{title}}: {{position}} at {{company}}";
const REMINDER_HTML: &str = "\
<html><body>\
<p>Hi {{user.name}},</p>\
<p>{{message}}</p>\
<table>\
<tr><td>Position</td><td>{{position}}</td></tr>\
<tr><td>Company</td><td>{{company}}</td></tr>\
</table>\
<p><a href=\"{{action_url}}\">View application</a></p>\
<p>JobTrail</p>\
</body></html>";
const REMINDER_TEXT: &str = "\
Hi {{user.name}},

{{message}}

Position: {{position}}
Company: {{company}}

View application: {{action_url}}

JobTrail";

const STATUS_CHANGED_SUBJECT: &str = "{{title}}";
const STATUS_CHANGED_HTML: &str = "\
<html><body>\
<p>Hi {{user.name}},</p>\
<p>{{message}}</p>\
<table>\
<tr><td>Position</td><td>{{position}}</td></tr>\
<tr><td>Company</td><td>{{company}}</td></tr>\
</table>\
<p><a href=\"{{action_url}}\">View application</a></p>\
<p>JobTrail</p>\
</body></html>";
const STATUS_CHANGED_TEXT: &str = "\
Hi {{user.name}},

{{message}}

Position: {{position}}
Company: {{company}}

View application: {{action_url}}

JobTrail";

const GENERAL_SUBJECT: &str = "{{title}}";
const GENERAL_HTML: &str = "\
<html><body>\
<p>Hi {{user.name}},</p>\
<p>{{message}}</p>\
<p><a href=\"{{action_url}}\">Open JobTrail</a></p>\
<p>JobTrail</p>\
</body></html>";
const GENERAL_TEXT: &str = "\
Hi {{user.name}},

{{message}}

Open JobTrail: {{action_url}}

JobTrail";

/// Registry of notification email templates.
pub struct EmailTemplates {
    handlebars: Handlebars<'static>,
}

impl EmailTemplates {
    /// Register all built-in templates.
    pub fn new() -> AppResult<Self> {
        let mut handlebars = Handlebars::new();

        let register = |hb: &mut Handlebars<'static>, name: &str, content: &str| {
            hb.register_template_string(name, content).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Internal,
                    format!("Failed to register email template {name}"),
                    e,
                )
            })
        };

        register(&mut handlebars, "interview/subject", INTERVIEW_SUBJECT)?;
        register(&mut handlebars, "interview/html", INTERVIEW_HTML)?;
        register(&mut handlebars, "interview/text", INTERVIEW_TEXT)?;
        register(&mut handlebars, "reminder/subject", REMINDER_SUBJECT)?;
        register(&mut handlebars, "reminder/html", REMINDER_HTML)?;
        register(&mut handlebars, "reminder/text", REMINDER_TEXT)?;
        register(
            &mut handlebars,
            "status_changed/subject",
            STATUS_CHANGED_SUBJECT,
        )?;
        register(&mut handlebars, "status_changed/html", STATUS_CHANGED_HTML)?;
        register(&mut handlebars, "status_changed/text", STATUS_CHANGED_TEXT)?;
        register(&mut handlebars, "general/subject", GENERAL_SUBJECT)?;
        register(&mut handlebars, "general/html", GENERAL_HTML)?;
        register(&mut handlebars, "general/text", GENERAL_TEXT)?;

        Ok(Self { handlebars })
    }

    /// Render the subject, HTML, and text bodies for a notification kind.
    pub fn render(
        &self,
        kind: NotificationKind,
        context: &serde_json::Value,
    ) -> AppResult<RenderedEmail> {
        let name = template_name(kind);

        let render_part = |part: &str| {
            self.handlebars
                .render(&format!("{name}/{part}"), context)
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Internal,
                        format!("Failed to render email template {name}/{part}"),
                        e,
                    )
                })
        };

        Ok(RenderedEmail {
            subject: render_part("subject")?.trim().to_string(),
            html: render_part("html")?,
            text: render_part("text")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> serde_json::Value {
        json!({
            "user": { "name": "Ada" },
            "title": "Interview Reminder",
            "message": "Your interview for Backend Engineer at Initech is tomorrow.",
            "action_url": "http://localhost:3000/applications/abc",
            "position": "Backend Engineer",
            "company": "Initech",
            "interview_date": "2025-06-10T14:00:00Z",
        })
    }

    #[test]
    fn interview_kinds_share_the_interview_template() {
        let templates = EmailTemplates::new().unwrap();
        let scheduled = templates
            .render(NotificationKind::InterviewScheduled, &context())
            .unwrap();
        let reminder = templates
            .render(NotificationKind::InterviewReminder, &context())
            .unwrap();
        assert_eq!(scheduled.subject, reminder.subject);
        assert!(reminder.html.contains("2025-06-10T14:00:00Z"));
    }

    #[test]
    fn subject_interpolates_position_and_company() {
        let templates = EmailTemplates::new().unwrap();
        let rendered = templates
            .render(NotificationKind::ApplicationDeadlineApproaching, &context())
            .unwrap();
        assert_eq!(
            rendered.subject,
            "Interview Reminder: Backend Engineer at Initech"
        );
    }

    #[test]
    fn unknown_kinds_fall_back_to_general() {
        let templates = EmailTemplates::new().unwrap();
        let rendered = templates
            .render(NotificationKind::System, &context())
            .unwrap();
        assert!(rendered.html.contains("Open JobTrail"));
        assert!(rendered.text.contains("Ada"));
    }

    #[test]
    fn absent_keys_render_without_error() {
        let templates = EmailTemplates::new().unwrap();
        let sparse = json!({
            "user": { "name": "Ada" },
            "title": "Notice",
            "message": "Hello",
            "action_url": "http://localhost:3000/notifications",
        });
        let rendered = templates
            .render(NotificationKind::FollowUpReminder, &sparse)
            .unwrap();
        assert!(rendered.text.contains("Hello"));
    }
}
