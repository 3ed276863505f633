//! SurveyForm aggregate - the form state controller.
//!
//! Owns values, touched flags, the derived error map and the loaded
//! additional questions. All mutation goes through its methods; validation
//! is recomputed after every change.
//!
//! # Question loading
//!
//! Changing the topic to a recognised value issues a [`QuestionTicket`].
//! The caller fetches questions for the ticket's topic and hands the result
//! back through [`SurveyForm::apply_questions`]. Tickets are sequenced: only
//! the most recently issued ticket may replace the question list, so a slow
//! response for an earlier topic can never overwrite a newer one.

use crate::domain::foundation::{FormId, StateMachine, Timestamp};
use crate::domain::survey::{
    is_applicable, spec_for, validate_form, visible_group, AdditionalQuestion, ErrorMap,
    FieldName, FieldValue, FieldValues, InputKind, QuestionDescriptor, QuestionPolicy,
    SurveyTopic, TouchedSet, FIELD_SCHEMA,
};

use super::errors::FormError;
use super::status::FormStatus;
use super::submission::Submission;

/// Permission to install the questions fetched for `topic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTicket {
    pub topic: SurveyTopic,
    pub sequence: u64,
}

/// What the renderer needs to draw one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub name: FieldName,
    pub label: String,
    pub kind: InputKind,
    pub choices: Vec<String>,
    pub value: String,
    /// Present only once the field is touched and invalid.
    pub error: Option<String>,
}

/// A mounted survey form.
#[derive(Debug, Clone)]
pub struct SurveyForm {
    id: FormId,
    values: FieldValues,
    touched: TouchedSet,
    errors: ErrorMap,
    questions: Vec<AdditionalQuestion>,
    question_policy: QuestionPolicy,
    status: FormStatus,
    latest_ticket: u64,
    mounted_at: Timestamp,
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyForm {
    /// Mounts a form with empty base fields and optional additional questions.
    pub fn new() -> Self {
        Self::with_policy(QuestionPolicy::default())
    }

    /// Mounts a form with the given policy for additional questions.
    pub fn with_policy(question_policy: QuestionPolicy) -> Self {
        let mut form = Self {
            id: FormId::new(),
            values: FieldValues::initial(),
            touched: TouchedSet::new(),
            errors: ErrorMap::new(),
            questions: Vec::new(),
            question_policy,
            status: FormStatus::Editing,
            latest_ticket: 0,
            mounted_at: Timestamp::now(),
        };
        form.revalidate();
        form
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &FormId {
        &self.id
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    /// Errors of every applicable field, touched or not.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn questions(&self) -> &[AdditionalQuestion] {
        &self.questions
    }

    pub fn question_policy(&self) -> QuestionPolicy {
        self.question_policy
    }

    pub fn mounted_at(&self) -> &Timestamp {
        &self.mounted_at
    }

    pub fn topic(&self) -> Option<SurveyTopic> {
        self.values.topic()
    }

    /// Topic group currently shown.
    pub fn visible_group(&self) -> Option<SurveyTopic> {
        visible_group(self.topic())
    }

    /// Whether `ticket` is still the latest one issued.
    pub fn is_current(&self, ticket: &QuestionTicket) -> bool {
        ticket.sequence == self.latest_ticket
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets a field's value and marks it touched.
    ///
    /// Returns a ticket when the topic changed to a recognised value and
    /// questions for it should be fetched.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` once the form is submitted
    /// - `UnknownField` for names outside the schema or unloaded questions
    pub fn set_value(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<Option<QuestionTicket>, FormError> {
        self.ensure_editable()?;
        let name = self.resolve(field)?;
        let previous_topic = self.topic();

        let value = self.coerce(name, value.into());
        self.values.set(name, value);
        self.touched.touch(name);
        self.revalidate();

        let topic = self.topic();
        if name != FieldName::SurveyTopic || topic == previous_topic {
            return Ok(None);
        }

        Ok(topic.map(|topic| {
            self.latest_ticket += 1;
            QuestionTicket {
                topic,
                sequence: self.latest_ticket,
            }
        }))
    }

    /// Marks a field touched without changing its value.
    pub fn set_touched(&mut self, field: &str) -> Result<(), FormError> {
        self.ensure_editable()?;
        let name = self.resolve(field)?;
        self.touched.touch(name);
        Ok(())
    }

    /// Replaces the additional questions with those fetched for `ticket`.
    ///
    /// Returns `false` without touching the form when the ticket has been
    /// superseded or the form is no longer editable.
    pub fn apply_questions(
        &mut self,
        ticket: &QuestionTicket,
        descriptors: Vec<QuestionDescriptor>,
    ) -> bool {
        if !self.is_current(ticket) || !self.status.is_editable() {
            return false;
        }

        self.values.clear_additional();
        self.touched.clear_additional();
        self.questions = AdditionalQuestion::index_all(descriptors);
        for question in &self.questions {
            self.values.set(question.field_name(), FieldValue::empty());
        }
        self.revalidate();
        true
    }

    /// Attempts submission.
    ///
    /// On success the form becomes `Submitted` and the full value set is
    /// returned. On failure every applicable field is marked touched so all
    /// errors become visible, and the form returns to `Editing`.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        self.ensure_editable()?;
        self.transition(FormStatus::Submitting)?;
        self.revalidate();

        if self.errors.is_empty() {
            self.transition(FormStatus::Submitted)?;
            return Ok(Submission {
                form_id: self.id,
                submitted_at: Timestamp::now(),
                values: self.values.clone(),
            });
        }

        let applicable: Vec<FieldName> = self.applicable_names().collect();
        self.touched.touch_all(applicable);
        self.transition(FormStatus::Editing)?;
        Err(FormError::ValidationFailed(self.errors.clone()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the renderer should show the field.
    pub fn is_visible(&self, field: FieldName) -> bool {
        if field.is_additional() {
            return self.question(field).is_some();
        }
        is_applicable(field, self.topic())
    }

    /// Error to display for a field: only once touched.
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        if self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Visible fields in display order; additional questions precede feedback.
    pub fn field_views(&self) -> Vec<FieldView> {
        let mut views = Vec::new();

        for spec in FIELD_SCHEMA.iter() {
            if spec.name == FieldName::Feedback {
                views.extend(self.questions.iter().map(|q| self.question_view(q)));
            }
            if !self.is_visible(spec.name) {
                continue;
            }
            views.push(FieldView {
                name: spec.name,
                label: spec.label.to_string(),
                kind: spec.kind.clone(),
                choices: spec.choices.iter().map(|c| c.to_string()).collect(),
                value: self.values.text(spec.name).into_owned(),
                error: self.visible_error(spec.name).map(str::to_string),
            });
        }

        views
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_editable(&self) -> Result<(), FormError> {
        match self.status {
            FormStatus::Submitted => Err(FormError::AlreadySubmitted),
            FormStatus::Submitting => Err(FormError::InvalidState(
                "submission in progress".to_string(),
            )),
            FormStatus::Editing => Ok(()),
        }
    }

    fn transition(&mut self, target: FormStatus) -> Result<(), FormError> {
        self.status = self.status.transition_to(target)?;
        Ok(())
    }

    fn resolve(&self, field: &str) -> Result<FieldName, FormError> {
        let name: FieldName = field.parse()?;
        if name.is_additional() && self.question(name).is_none() {
            return Err(FormError::unknown_field(field));
        }
        Ok(name)
    }

    fn question(&self, field: FieldName) -> Option<&AdditionalQuestion> {
        match field {
            FieldName::AdditionalQuestion(index) => self.questions.get(index),
            _ => None,
        }
    }

    fn kind_of(&self, field: FieldName) -> Option<&InputKind> {
        match spec_for(field) {
            Some(spec) => Some(&spec.kind),
            None => self.question(field).map(|q| &q.kind),
        }
    }

    /// Number inputs store numbers when the text parses; anything else is
    /// kept verbatim so validation can report it.
    fn coerce(&self, field: FieldName, value: FieldValue) -> FieldValue {
        let number_input = matches!(self.kind_of(field), Some(InputKind::Number));
        match value {
            FieldValue::Text(_) if number_input => match value.as_number() {
                Some(number) => FieldValue::Number(number),
                None => value,
            },
            _ => value,
        }
    }

    fn applicable_names(&self) -> impl Iterator<Item = FieldName> + '_ {
        let topic = self.topic();
        FIELD_SCHEMA
            .iter()
            .map(|spec| spec.name)
            .filter(move |name| is_applicable(*name, topic))
            .chain(self.questions.iter().map(AdditionalQuestion::field_name))
    }

    fn question_view(&self, question: &AdditionalQuestion) -> FieldView {
        let name = question.field_name();
        FieldView {
            name,
            label: question.label.clone(),
            kind: question.kind.clone(),
            choices: Vec::new(),
            value: self.values.text(name).into_owned(),
            error: self.visible_error(name).map(str::to_string),
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate_form(
            &self.values,
            self.topic(),
            &self.questions,
            self.question_policy,
        );
    }
}
