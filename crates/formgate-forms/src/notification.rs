//! User-facing notifications
//!
//! [`NotificationSink`] turns submission outcomes into [`Notification`]s and
//! hands them to a [`Notifier`], the toast dispatcher of the host UI.

use crate::config::FormConfig;
use crate::submission::{SubmissionSink, summarize};
use formgate_core::{ErrorMap, FieldSet, FormValues};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Title of the notification sent for an accepted submission
pub const SUBMITTED_TITLE: &str = "Your form has been submitted!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
	Success,
	Destructive,
}

/// A transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
	pub variant: NotificationVariant,
	pub title: String,
	/// Body lines, possibly empty
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub description: Vec<String>,
}

impl Notification {
	pub fn success(title: impl Into<String>) -> Self {
		Self {
			variant: NotificationVariant::Success,
			title: title.into(),
			description: Vec::new(),
		}
	}

	pub fn destructive(title: impl Into<String>) -> Self {
		Self {
			variant: NotificationVariant::Destructive,
			title: title.into(),
			description: Vec::new(),
		}
	}

	pub fn with_line(mut self, line: impl Into<String>) -> Self {
		self.description.push(line.into());
		self
	}

	pub fn with_lines<I, S>(mut self, lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.description.extend(lines.into_iter().map(Into::into));
		self
	}
}

/// Dispatcher for [`Notification`]s
pub trait Notifier: Send + Sync {
	fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
	fn notify(&self, notification: Notification) {
		(**self).notify(notification)
	}
}

/// Notifier that keeps every notification in memory
///
/// Clones share the same storage.
///
/// # Examples
///
/// ```
/// use formgate_forms::{Notification, Notifier, RecordingNotifier};
///
/// let notifier = RecordingNotifier::new();
/// notifier.clone().notify(Notification::success("Saved"));
///
/// assert_eq!(notifier.notifications().len(), 1);
/// assert_eq!(notifier.last().unwrap().title, "Saved");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
	notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn notifications(&self) -> Vec<Notification> {
		self.notifications.lock().clone()
	}

	pub fn last(&self) -> Option<Notification> {
		self.notifications.lock().last().cloned()
	}

	pub fn clear(&self) {
		self.notifications.lock().clear();
	}
}

impl Notifier for RecordingNotifier {
	fn notify(&self, notification: Notification) {
		self.notifications.lock().push(notification);
	}
}

/// Sink that logs submissions and notifies the user
///
/// An accepted submission produces a success notification titled
/// [`SUBMITTED_TITLE`] with one `"<Label>: <value>"` line per field. A
/// rejected submission produces a destructive notification only when
/// rejection notices are enabled; its title is the first distinct error
/// message and the remaining distinct messages become description lines.
///
/// Log redaction follows the owning controller's
/// [`FormConfig::redact_secrets`]; notifications always show every value.
pub struct NotificationSink<N> {
	notifier: N,
	fields: FieldSet,
	notify_rejections: bool,
	redact_secrets: bool,
}

impl<N: Notifier> NotificationSink<N> {
	pub fn new(notifier: N, fields: FieldSet) -> Self {
		Self {
			notifier,
			fields,
			notify_rejections: false,
			redact_secrets: true,
		}
	}

	pub fn with_rejection_notices(mut self, enabled: bool) -> Self {
		self.notify_rejections = enabled;
		self
	}

	pub fn with_redact_secrets(mut self, enabled: bool) -> Self {
		self.redact_secrets = enabled;
		self
	}

	pub fn notifier(&self) -> &N {
		&self.notifier
	}

	fn label<'a>(&'a self, field: &'a str) -> &'a str {
		self.fields
			.get(field)
			.map_or(field, |descriptor| descriptor.label.as_str())
	}
}

impl<N: Notifier> SubmissionSink for NotificationSink<N> {
	fn configure(&mut self, config: &FormConfig) {
		self.redact_secrets = config.redact_secrets;
	}

	fn accepted(&mut self, values: &FormValues) {
		tracing::info!(
			submission = %summarize(&self.fields, values, self.redact_secrets),
			"form submitted"
		);
		let lines = values
			.iter()
			.map(|(name, value)| format!("{}: {value}", self.label(name.as_str())));
		self.notifier
			.notify(Notification::success(SUBMITTED_TITLE).with_lines(lines));
	}

	fn rejected(&mut self, errors: &ErrorMap) {
		if !self.notify_rejections {
			return;
		}
		let messages = errors.distinct_messages();
		let Some((title, rest)) = messages.split_first() else {
			return;
		};
		self.notifier
			.notify(Notification::destructive(*title).with_lines(rest.iter().copied()));
	}
}

impl<N> std::fmt::Debug for NotificationSink<N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NotificationSink")
			.field("fields", &self.fields.len())
			.field("notify_rejections", &self.notify_rejections)
			.field("redact_secrets", &self.redact_secrets)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use formgate_core::{FieldDescriptor, Widget};
	use rstest::*;

	#[fixture]
	fn fields() -> FieldSet {
		FieldSet::new()
			.with_field(FieldDescriptor::new("firstName").with_label("First Name"))
			.with_field(
				FieldDescriptor::new("password")
					.with_label("Password")
					.with_widget(Widget::PasswordInput),
			)
	}

	#[rstest]
	fn test_accepted_lists_labelled_values(fields: FieldSet) {
		// Arrange
		let notifier = RecordingNotifier::new();
		let mut sink = NotificationSink::new(notifier.clone(), fields);
		let values = FormValues::from_iter([("firstName", "Jane"), ("password", "secret12")]);

		// Act
		sink.accepted(&values);

		// Assert
		assert_eq!(
			notifier.notifications(),
			vec![
				Notification::success("Your form has been submitted!")
					.with_lines(["First Name: Jane", "Password: secret12"])
			]
		);
	}

	#[rstest]
	fn test_rejection_is_silent_by_default(fields: FieldSet) {
		// Arrange
		let notifier = RecordingNotifier::new();
		let mut sink = NotificationSink::new(notifier.clone(), fields);

		// Act
		sink.rejected(&ErrorMap::from_iter([("firstName", "First Name is required")]));

		// Assert
		assert!(notifier.notifications().is_empty());
	}

	#[rstest]
	fn test_rejection_notice_deduplicates_messages(fields: FieldSet) {
		// Arrange
		let notifier = RecordingNotifier::new();
		let mut sink = NotificationSink::new(notifier.clone(), fields).with_rejection_notices(true);
		let errors = ErrorMap::from_iter([
			("firstName", "Please fill all the fields."),
			("password", "Please fill all the fields."),
		]);

		// Act
		sink.rejected(&errors);

		// Assert
		assert_eq!(
			notifier.last(),
			Some(Notification::destructive("Please fill all the fields."))
		);
	}

	#[rstest]
	fn test_unlabelled_field_uses_its_name() {
		// Arrange
		let notifier = RecordingNotifier::new();
		let mut sink = NotificationSink::new(notifier.clone(), FieldSet::new());

		// Act
		sink.accepted(&FormValues::from_iter([("nickname", "JJ")]));

		// Assert
		assert_eq!(notifier.last().unwrap().description, ["nickname: JJ"]);
	}

	#[rstest]
	fn test_notification_serialization() {
		// Arrange
		let notification = Notification::destructive("Please fill all the fields.");

		// Act
		let json = serde_json::to_value(&notification).unwrap();

		// Assert
		assert_eq!(
			json,
			serde_json::json!({ "variant": "destructive", "title": "Please fill all the fields." })
		);
	}
}
