use std::time::Duration;

use iced::widget::text_input;
use iced::{Subscription, Task};

use campusqa_ui::component::form;
use campusqa_ui::widget::Element;

use crate::{
    config::Config,
    services::portal::{api, PortalClient},
    session::{
        otp::{OtpSession, OTP_CODE_LEN},
        UserId,
    },
    setup::{
        context::Context,
        message::{AlumniMessage, DesignationMessage, FacultyMessage, Message, StudentMessage},
        step::{Step, StepId},
        view,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Student,
    Faculty,
    Alumni,
}

impl VariantKind {
    pub const ALL: [VariantKind; 3] = [
        VariantKind::Student,
        VariantKind::Faculty,
        VariantKind::Alumni,
    ];
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Student => write!(f, "Student"),
            Self::Faculty => write!(f, "Faculty"),
            Self::Alumni => write!(f, "Alumni"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    BTech,
    Bba,
    Bca,
    Mba,
}

impl Program {
    pub const ALL: [Program; 4] = [Program::BTech, Program::Bba, Program::Bca, Program::Mba];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::BTech => "btech",
            Self::Bba => "bba",
            Self::Bca => "bca",
            Self::Mba => "mba",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().find(|p| p.slug() == slug).copied()
    }

    /// Departments offered per program.
    pub fn departments(&self) -> &'static [&'static str] {
        match self {
            Self::BTech => &[
                "Computer Science",
                "Mechanical",
                "Electrical",
                "Civil",
                "Electronics",
            ],
            Self::Bba => &["Marketing", "Finance", "Human Resources", "Operations"],
            Self::Bca => &["Software Development", "Networking", "Database Management"],
            Self::Mba => &[
                "Marketing",
                "Finance",
                "Human Resources",
                "Operations",
                "International Business",
            ],
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::BTech => write!(f, "B.Tech"),
            Self::Bba => write!(f, "BBA"),
            Self::Bca => write!(f, "BCA"),
            Self::Mba => write!(f, "MBA"),
        }
    }
}

pub fn department_slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")
}

/// An input of a variant form. The required constraint is stripped while
/// the form is hidden and remembered through `was_required`, so a hidden
/// form can never block submission of the visible one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantField {
    pub value: form::Value<String>,
    pub required: bool,
    pub was_required: bool,
}

impl VariantField {
    fn required() -> Self {
        VariantField {
            value: form::Value::default(),
            required: true,
            was_required: false,
        }
    }

    fn optional() -> Self {
        VariantField {
            value: form::Value::default(),
            required: false,
            was_required: false,
        }
    }

    fn set(&mut self, value: String) {
        self.value.value = value;
        self.value.valid = true;
    }

    fn is_blank(&self) -> bool {
        self.value.value.trim().is_empty()
    }
}

pub trait VariantForm {
    fn fields(&self) -> Vec<&VariantField>;
    fn fields_mut(&mut self) -> Vec<&mut VariantField>;

    /// The form goes out of sight: strip the required constraint from
    /// every field, remembering it in the side flag.
    fn hide(&mut self) {
        for field in self.fields_mut() {
            if field.required {
                field.was_required = true;
                field.required = false;
            }
        }
    }

    /// The form becomes the visible one: restore the required constraint
    /// for its own fields only.
    fn show(&mut self) {
        for field in self.fields_mut() {
            if field.was_required {
                field.required = true;
                field.was_required = false;
            }
        }
    }

    fn has_missing_required(&self) -> bool {
        self.fields()
            .iter()
            .any(|field| field.required && field.is_blank())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentForm {
    pub registration_no: VariantField,
    pub program: VariantField,
    pub department: VariantField,
    pub current_year: VariantField,
    pub graduation_year: VariantField,
    pub college_email: VariantField,
}

impl StudentForm {
    fn new() -> Self {
        Self {
            registration_no: VariantField::required(),
            program: VariantField::required(),
            department: VariantField::required(),
            current_year: VariantField::required(),
            graduation_year: VariantField::required(),
            college_email: VariantField::required(),
        }
    }
}

impl VariantForm for StudentForm {
    fn fields(&self) -> Vec<&VariantField> {
        vec![
            &self.registration_no,
            &self.program,
            &self.department,
            &self.current_year,
            &self.graduation_year,
            &self.college_email,
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut VariantField> {
        vec![
            &mut self.registration_no,
            &mut self.program,
            &mut self.department,
            &mut self.current_year,
            &mut self.graduation_year,
            &mut self.college_email,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacultyForm {
    pub faculty_id: VariantField,
    pub department: VariantField,
    pub post: VariantField,
    pub courses_taught: VariantField,
    pub office_location: VariantField,
    pub experience: VariantField,
    pub research: VariantField,
}

impl FacultyForm {
    fn new() -> Self {
        Self {
            faculty_id: VariantField::required(),
            department: VariantField::required(),
            post: VariantField::required(),
            courses_taught: VariantField::required(),
            office_location: VariantField::required(),
            experience: VariantField::required(),
            research: VariantField::optional(),
        }
    }
}

impl VariantForm for FacultyForm {
    fn fields(&self) -> Vec<&VariantField> {
        vec![
            &self.faculty_id,
            &self.department,
            &self.post,
            &self.courses_taught,
            &self.office_location,
            &self.experience,
            &self.research,
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut VariantField> {
        vec![
            &mut self.faculty_id,
            &mut self.department,
            &mut self.post,
            &mut self.courses_taught,
            &mut self.office_location,
            &mut self.experience,
            &mut self.research,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlumniForm {
    pub graduation_year: VariantField,
    pub program: VariantField,
    pub department: VariantField,
    pub job_title: VariantField,
    pub company_name: VariantField,
    pub linkedin: VariantField,
}

impl AlumniForm {
    fn new() -> Self {
        Self {
            graduation_year: VariantField::required(),
            program: VariantField::required(),
            department: VariantField::required(),
            job_title: VariantField::required(),
            company_name: VariantField::required(),
            linkedin: VariantField::optional(),
        }
    }
}

impl VariantForm for AlumniForm {
    fn fields(&self) -> Vec<&VariantField> {
        vec![
            &self.graduation_year,
            &self.program,
            &self.department,
            &self.job_title,
            &self.company_name,
            &self.linkedin,
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut VariantField> {
        vec![
            &mut self.graduation_year,
            &mut self.program,
            &mut self.department,
            &mut self.job_title,
            &mut self.company_name,
            &mut self.linkedin,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Error,
}

pub struct Designation {
    client: PortalClient,
    user_id: UserId,
    config: Config,

    pub(crate) active: Option<VariantKind>,
    pub(crate) student: StudentForm,
    pub(crate) faculty: FacultyForm,
    pub(crate) alumni: AlumniForm,

    pub(crate) otp: OtpSession,
    pub(crate) code: form::Value<String>,
    pub(crate) otp_processing: bool,
    pub(crate) otp_status: Option<(StatusLevel, String)>,

    pub(crate) processing: bool,
    pub(crate) warning: Option<String>,
}

pub fn registration_input_id() -> text_input::Id {
    text_input::Id::new("designation-registration-no")
}

impl Designation {
    pub fn new(client: PortalClient, user_id: UserId, config: Config) -> Self {
        Self {
            client,
            user_id,
            config,
            active: None,
            student: StudentForm::new(),
            faculty: FacultyForm::new(),
            alumni: AlumniForm::new(),
            otp: OtpSession::new(),
            code: form::Value::default(),
            otp_processing: false,
            otp_status: None,
            processing: false,
            warning: None,
        }
    }

    /// Marks the selected variant active, strips the required constraint
    /// from every field of the now hidden forms and restores it for the
    /// selected form only.
    pub(crate) fn select_variant(&mut self, kind: VariantKind) {
        self.student.hide();
        self.faculty.hide();
        self.alumni.hide();
        self.active = Some(kind);
        match kind {
            VariantKind::Student => self.student.show(),
            VariantKind::Faculty => self.faculty.show(),
            VariantKind::Alumni => self.alumni.show(),
        }
    }

    fn validate(&self) -> Option<String> {
        let kind = match self.active {
            Some(kind) => kind,
            None => return Some("Please select a designation type".to_string()),
        };
        match kind {
            VariantKind::Student => {
                if self.student.has_missing_required()
                    || parse_year(&self.student.current_year.value.value).is_none()
                    || parse_year(&self.student.graduation_year.value.value).is_none()
                {
                    return Some("Please fill in all required student fields".to_string());
                }
                if !self
                    .config
                    .is_college_email(self.student.college_email.value.value.trim())
                {
                    return Some("Please enter a valid college email".to_string());
                }
            }
            VariantKind::Faculty => {
                if self.faculty.has_missing_required()
                    || parse_year(&self.faculty.experience.value.value).is_none()
                {
                    return Some("Please fill in all required faculty fields".to_string());
                }
            }
            VariantKind::Alumni => {
                if self.alumni.has_missing_required()
                    || parse_year(&self.alumni.graduation_year.value.value).is_none()
                {
                    return Some("Please fill in all required alumni fields".to_string());
                }
            }
        }
        None
    }

    /// Serializes only the active variant's fields.
    fn serialized(&self) -> Option<api::Designation> {
        if self.validate().is_some() {
            return None;
        }
        match self.active? {
            VariantKind::Student => Some(api::Designation::Student {
                registration_no: self.student.registration_no.value.value.trim().to_string(),
                program: self.student.program.value.value.clone(),
                department: self.student.department.value.value.clone(),
                current_year: parse_year(&self.student.current_year.value.value)?,
                graduation_year: parse_year(&self.student.graduation_year.value.value)?,
                college_email: self.student.college_email.value.value.trim().to_string(),
                is_college_email_verified: self.otp.is_verified(),
            }),
            VariantKind::Faculty => Some(api::Designation::Faculty {
                faculty_id: self.faculty.faculty_id.value.value.trim().to_string(),
                faculty_department: self.faculty.department.value.value.trim().to_string(),
                post: self.faculty.post.value.value.trim().to_string(),
                courses_taught: self.faculty.courses_taught.value.value.trim().to_string(),
                office_location: self.faculty.office_location.value.value.trim().to_string(),
                experience: parse_year(&self.faculty.experience.value.value)?,
                research: blank_to_none(&self.faculty.research.value.value),
            }),
            VariantKind::Alumni => Some(api::Designation::Alumni {
                graduation_year: parse_year(&self.alumni.graduation_year.value.value)?,
                program: self.alumni.program.value.value.clone(),
                department: self.alumni.department.value.value.clone(),
                job_title: self.alumni.job_title.value.value.trim().to_string(),
                company_name: self.alumni.company_name.value.value.trim().to_string(),
                linkedin: blank_to_none(&self.alumni.linkedin.value.value),
            }),
        }
    }

    fn send_otp(&mut self) -> Task<Message> {
        let email = self.student.college_email.value.value.trim().to_string();
        if email.is_empty() {
            self.otp_status = Some((
                StatusLevel::Error,
                "Please enter your college email address".to_string(),
            ));
            return Task::none();
        }
        if !self.config.is_college_email(&email) {
            self.otp_status = Some((
                StatusLevel::Error,
                "Please enter a valid college email".to_string(),
            ));
            return Task::none();
        }
        self.otp.edit_email(email.clone());
        self.otp_processing = true;
        self.otp_status = None;
        let client = self.client.clone();
        let user_id = self.user_id.clone();
        Task::perform(
            async move { client.send_college_otp(&user_id, &email).await },
            |res| Message::Designation(DesignationMessage::OtpSent(res)),
        )
    }

    fn verify_otp(&mut self) -> Task<Message> {
        if self.code.value.len() != OTP_CODE_LEN {
            self.code.valid = false;
            self.otp_status = Some((StatusLevel::Error, "OTP must be 6 digits".to_string()));
            return Task::none();
        }
        self.otp_processing = true;
        self.otp_status = None;
        let client = self.client.clone();
        let user_id = self.user_id.clone();
        let email = self.otp.email().to_string();
        let code = self.code.value.clone();
        Task::perform(
            async move { client.verify_college_otp(&user_id, &email, &code).await },
            |res| Message::Designation(DesignationMessage::OtpVerifyResult(res)),
        )
    }

    fn submit(&mut self) -> Task<Message> {
        if let Some(warning) = self.validate() {
            self.warning = Some(warning);
            return Task::none();
        }
        let designation = match self.serialized() {
            Some(designation) => designation,
            None => return Task::none(),
        };
        self.warning = None;
        self.processing = true;
        let client = self.client.clone();
        let user_id = self.user_id.clone();
        Task::perform(
            async move { client.save_designation(&user_id, &designation).await },
            |res| Message::Designation(DesignationMessage::Saved(res)),
        )
    }

    fn on_student(&mut self, message: StudentMessage) {
        match message {
            StudentMessage::RegistrationNoEdited(value) => self.student.registration_no.set(value),
            StudentMessage::ProgramSelected(program) => {
                self.student.program.set(program.slug().to_string());
                // switching program invalidates the previous department
                self.student.department.set(String::new());
            }
            StudentMessage::DepartmentSelected(name) => {
                self.student.department.set(department_slug(&name))
            }
            StudentMessage::CurrentYearEdited(value) => self.student.current_year.set(value),
            StudentMessage::GraduationYearEdited(value) => self.student.graduation_year.set(value),
            StudentMessage::CollegeEmailEdited(value) => {
                let trimmed = value.trim().to_string();
                self.student.college_email.set(trimmed.clone());
                // a code is only valid for the email it was issued to
                self.otp.edit_email(trimmed);
                self.code = form::Value::default();
                self.otp_status = None;
            }
        }
    }

    fn on_faculty(&mut self, message: FacultyMessage) {
        match message {
            FacultyMessage::FacultyIdEdited(value) => self.faculty.faculty_id.set(value),
            FacultyMessage::DepartmentEdited(value) => self.faculty.department.set(value),
            FacultyMessage::PostEdited(value) => self.faculty.post.set(value),
            FacultyMessage::CoursesEdited(value) => self.faculty.courses_taught.set(value),
            FacultyMessage::OfficeEdited(value) => self.faculty.office_location.set(value),
            FacultyMessage::ExperienceEdited(value) => self.faculty.experience.set(value),
            FacultyMessage::ResearchEdited(value) => self.faculty.research.set(value),
        }
    }

    fn on_alumni(&mut self, message: AlumniMessage) {
        match message {
            AlumniMessage::GraduationYearEdited(value) => self.alumni.graduation_year.set(value),
            AlumniMessage::ProgramSelected(program) => {
                self.alumni.program.set(program.slug().to_string());
                self.alumni.department.set(String::new());
            }
            AlumniMessage::DepartmentSelected(name) => {
                self.alumni.department.set(department_slug(&name))
            }
            AlumniMessage::JobTitleEdited(value) => self.alumni.job_title.set(value),
            AlumniMessage::CompanyEdited(value) => self.alumni.company_name.set(value),
            AlumniMessage::LinkedinEdited(value) => self.alumni.linkedin.set(value),
        }
    }
}

impl From<Designation> for Box<dyn Step> {
    fn from(s: Designation) -> Box<dyn Step> {
        Box::new(s)
    }
}

impl Step for Designation {
    fn id(&self) -> StepId {
        StepId::Designation
    }

    fn subscription(&self) -> Subscription<Message> {
        // The countdown ticker exists only while a code is pending, which
        // makes it single-instance and self-cancelling.
        if self.otp.is_counting() {
            iced::time::every(Duration::from_secs(1))
                .map(|_| Message::Designation(DesignationMessage::Tick))
        } else {
            Subscription::none()
        }
    }

    fn load_context(&mut self, ctx: &Context) {
        let saved = match &ctx.designation {
            Some(saved) => saved.clone(),
            None => return,
        };
        match saved {
            api::Designation::Student {
                registration_no,
                program,
                department,
                current_year,
                graduation_year,
                college_email,
                is_college_email_verified,
            } => {
                self.select_variant(VariantKind::Student);
                self.student.registration_no.set(registration_no);
                self.student.program.set(program);
                self.student.department.set(department);
                self.student.current_year.set(current_year.to_string());
                self.student
                    .graduation_year
                    .set(graduation_year.to_string());
                self.student.college_email.set(college_email.clone());
                self.otp.edit_email(college_email);
                if is_college_email_verified {
                    self.otp.verified();
                    self.otp_status = Some((
                        StatusLevel::Success,
                        "College email already verified ✓".to_string(),
                    ));
                }
            }
            api::Designation::Faculty {
                faculty_id,
                faculty_department,
                post,
                courses_taught,
                office_location,
                experience,
                research,
            } => {
                self.select_variant(VariantKind::Faculty);
                self.faculty.faculty_id.set(faculty_id);
                self.faculty.department.set(faculty_department);
                self.faculty.post.set(post);
                self.faculty.courses_taught.set(courses_taught);
                self.faculty.office_location.set(office_location);
                self.faculty.experience.set(experience.to_string());
                self.faculty.research.set(research.unwrap_or_default());
            }
            api::Designation::Alumni {
                graduation_year,
                program,
                department,
                job_title,
                company_name,
                linkedin,
            } => {
                self.select_variant(VariantKind::Alumni);
                self.alumni.graduation_year.set(graduation_year.to_string());
                self.alumni.program.set(program);
                self.alumni.department.set(department);
                self.alumni.job_title.set(job_title);
                self.alumni.company_name.set(company_name);
                self.alumni.linkedin.set(linkedin.unwrap_or_default());
            }
        }
    }

    fn load(&self) -> Task<Message> {
        text_input::focus(registration_input_id())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Designation(message) = message {
            match message {
                DesignationMessage::SelectVariant(kind) => self.select_variant(kind),
                DesignationMessage::Student(msg) => self.on_student(msg),
                DesignationMessage::Faculty(msg) => self.on_faculty(msg),
                DesignationMessage::Alumni(msg) => self.on_alumni(msg),
                DesignationMessage::SendOtp | DesignationMessage::ResendOtp => {
                    return self.send_otp()
                }
                DesignationMessage::OtpCodeEdited(value) => {
                    self.code.value = value.trim().to_string();
                    self.code.valid = true;
                }
                DesignationMessage::VerifyOtp => return self.verify_otp(),
                DesignationMessage::OtpSent(res) => {
                    self.otp_processing = false;
                    match res {
                        Ok(issued) => {
                            if issued.already_verified {
                                // no code entry at all for an address the
                                // backend already confirmed
                                self.otp.verified();
                                self.otp_status = Some((
                                    StatusLevel::Success,
                                    "This email is already verified ✓".to_string(),
                                ));
                            } else {
                                self.otp.sent();
                                self.code = form::Value::default();
                                self.otp_status = Some((
                                    StatusLevel::Success,
                                    "OTP has been sent to your college email.".to_string(),
                                ));
                            }
                        }
                        Err(e) => {
                            self.otp_status = Some((StatusLevel::Error, e.to_string()));
                        }
                    }
                }
                DesignationMessage::OtpVerifyResult(res) => {
                    self.otp_processing = false;
                    match res {
                        Ok(()) => {
                            self.otp.verified();
                            self.otp_status = Some((
                                StatusLevel::Success,
                                "College email verified successfully!".to_string(),
                            ));
                        }
                        Err(e) => {
                            self.otp_status = Some((StatusLevel::Error, e.to_string()));
                        }
                    }
                }
                DesignationMessage::Tick => {
                    if self.otp.tick() {
                        self.otp_status = Some((
                            StatusLevel::Error,
                            "OTP has expired. Please request a new one.".to_string(),
                        ));
                    }
                }
                DesignationMessage::Submit => return self.submit(),
                DesignationMessage::Saved(res) => {
                    self.processing = false;
                    match res {
                        Ok(()) => {
                            self.warning = None;
                            return Task::perform(async {}, |_| Message::Next);
                        }
                        Err(e) => {
                            self.warning = Some(e.to_string());
                        }
                    }
                }
            }
        }
        Task::none()
    }

    fn apply(&mut self, ctx: &mut Context) -> bool {
        if let Some(designation) = self.serialized() {
            ctx.designation = Some(designation);
        }
        true
    }

    fn view(&self) -> Element<Message> {
        view::designation(self)
    }
}

fn parse_year(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::otp::OtpState;

    fn step() -> Designation {
        Designation::new(
            PortalClient::new("http://localhost:0".to_string()),
            UserId::Number(42),
            Config::default(),
        )
    }

    fn fill_student(step: &mut Designation) {
        step.select_variant(VariantKind::Student);
        step.student.registration_no.set("12100001".to_string());
        step.student.program.set("btech".to_string());
        step.student.department.set("computer_science".to_string());
        step.student.current_year.set("3".to_string());
        step.student.graduation_year.set("2026".to_string());
        step.student
            .college_email
            .set("jane@students.lpu.in".to_string());
    }

    fn required_count(form: &dyn VariantForm) -> usize {
        form.fields().iter().filter(|f| f.required).count()
    }

    #[test]
    fn switching_variants_never_leaves_a_hidden_field_required() {
        let mut step = step();

        step.select_variant(VariantKind::Student);
        assert_eq!(required_count(&step.student), 6);

        step.select_variant(VariantKind::Faculty);
        assert_eq!(required_count(&step.student), 0);
        assert_eq!(required_count(&step.faculty), 6);
        assert_eq!(required_count(&step.alumni), 0);

        step.select_variant(VariantKind::Alumni);
        assert_eq!(required_count(&step.student), 0);
        assert_eq!(required_count(&step.faculty), 0);
        assert_eq!(required_count(&step.alumni), 5);

        // revisiting restores the original required set
        step.select_variant(VariantKind::Student);
        assert_eq!(required_count(&step.student), 6);
        assert_eq!(required_count(&step.faculty), 0);
        assert_eq!(required_count(&step.alumni), 0);

        // optional fields never become required
        assert!(!step.faculty.research.required);
        assert!(!step.alumni.linkedin.required);
    }

    #[test]
    fn reselecting_the_active_variant_is_stable() {
        let mut step = step();
        step.select_variant(VariantKind::Faculty);
        step.select_variant(VariantKind::Faculty);
        assert_eq!(required_count(&step.faculty), 6);
        assert_eq!(required_count(&step.student), 0);
    }

    #[test]
    fn no_variant_selected_blocks_submission() {
        let mut step = step();
        let _ = step.update(Message::Designation(DesignationMessage::Submit));
        assert_eq!(
            step.warning.as_deref(),
            Some("Please select a designation type")
        );
        assert!(!step.processing);
    }

    #[test]
    fn non_institutional_email_blocks_student_submission() {
        let mut step = step();
        fill_student(&mut step);
        step.student.college_email.set("user@gmail.com".to_string());
        let _ = step.update(Message::Designation(DesignationMessage::Submit));
        assert_eq!(
            step.warning.as_deref(),
            Some("Please enter a valid college email")
        );
        assert!(!step.processing);
    }

    #[test]
    fn missing_student_fields_block_submission() {
        let mut step = step();
        fill_student(&mut step);
        step.student.registration_no.set(String::new());
        let _ = step.update(Message::Designation(DesignationMessage::Submit));
        assert_eq!(
            step.warning.as_deref(),
            Some("Please fill in all required student fields")
        );
    }

    #[test]
    fn a_hidden_variant_cannot_block_the_visible_one() {
        let mut step = step();
        // visit student first, leaving its fields blank
        step.select_variant(VariantKind::Student);
        step.select_variant(VariantKind::Faculty);
        step.faculty.faculty_id.set("F-7".to_string());
        step.faculty.department.set("CSE".to_string());
        step.faculty.post.set("Professor".to_string());
        step.faculty.courses_taught.set("CS101".to_string());
        step.faculty.office_location.set("B-204".to_string());
        step.faculty.experience.set("12".to_string());
        assert_eq!(step.validate(), None);
    }

    #[test]
    fn already_verified_short_circuits_to_verified() {
        let mut step = step();
        fill_student(&mut step);
        let _ = step.update(Message::Designation(DesignationMessage::SendOtp));
        assert!(step.otp_processing);
        let _ = step.update(Message::Designation(DesignationMessage::OtpSent(Ok(
            api::CollegeOtp {
                success: true,
                message: None,
                already_verified: true,
            },
        ))));
        assert!(!step.otp_processing);
        assert!(step.otp.is_verified());
        // never entered Sent: no countdown is running
        assert!(!step.otp.is_counting());
    }

    #[test]
    fn issued_code_starts_the_countdown_and_verifies() {
        let mut step = step();
        fill_student(&mut step);
        let _ = step.update(Message::Designation(DesignationMessage::SendOtp));
        let _ = step.update(Message::Designation(DesignationMessage::OtpSent(Ok(
            api::CollegeOtp {
                success: true,
                message: None,
                already_verified: false,
            },
        ))));
        assert!(step.otp.is_counting());

        let _ = step.update(Message::Designation(DesignationMessage::OtpCodeEdited(
            "123456".to_string(),
        )));
        let _ = step.update(Message::Designation(DesignationMessage::VerifyOtp));
        assert!(step.otp_processing);
        let _ = step.update(Message::Designation(DesignationMessage::OtpVerifyResult(
            Ok(()),
        )));
        assert!(step.otp.is_verified());
        assert!(!step.otp.is_counting());

        let serialized = step.serialized().unwrap();
        assert!(matches!(
            serialized,
            api::Designation::Student {
                is_college_email_verified: true,
                ..
            }
        ));
    }

    #[test]
    fn short_code_is_rejected_locally() {
        let mut step = step();
        fill_student(&mut step);
        let _ = step.update(Message::Designation(DesignationMessage::OtpCodeEdited(
            "123".to_string(),
        )));
        let _ = step.update(Message::Designation(DesignationMessage::VerifyOtp));
        assert!(!step.otp_processing);
        assert!(!step.code.valid);
    }

    #[test]
    fn editing_the_email_resets_a_pending_code() {
        let mut step = step();
        fill_student(&mut step);
        let _ = step.update(Message::Designation(DesignationMessage::SendOtp));
        let _ = step.update(Message::Designation(DesignationMessage::OtpSent(Ok(
            api::CollegeOtp {
                success: true,
                message: None,
                already_verified: false,
            },
        ))));
        assert!(step.otp.is_counting());

        let _ = step.update(Message::Designation(DesignationMessage::Student(
            StudentMessage::CollegeEmailEdited("john@students.lpu.in".to_string()),
        )));
        assert_eq!(*step.otp.state(), OtpState::Idle);
        assert!(!step.otp.is_counting());
        assert_eq!(step.code.value, "");
    }

    #[test]
    fn countdown_expiry_disables_verification() {
        let mut step = step();
        fill_student(&mut step);
        let _ = step.update(Message::Designation(DesignationMessage::SendOtp));
        let _ = step.update(Message::Designation(DesignationMessage::OtpSent(Ok(
            api::CollegeOtp {
                success: true,
                message: None,
                already_verified: false,
            },
        ))));
        for _ in 0..crate::session::otp::OTP_VALIDITY.as_secs() {
            let _ = step.update(Message::Designation(DesignationMessage::Tick));
        }
        assert!(step.otp.is_expired());
        assert!(matches!(
            step.otp_status,
            Some((StatusLevel::Error, _))
        ));
    }

    #[test]
    fn saved_designation_reactivates_the_variant() {
        let mut step = step();
        let session = crate::session::Session {
            credential: crate::session::Credential::new("t".to_string()),
            claims: crate::session::Claims {
                user_id: UserId::Number(42),
                email: None,
            },
        };
        let mut ctx = Context::new(Config::default(), session, false);
        ctx.designation = Some(api::Designation::Student {
            registration_no: "12100001".to_string(),
            program: "btech".to_string(),
            department: "computer_science".to_string(),
            current_year: 3,
            graduation_year: 2026,
            college_email: "jane@students.lpu.in".to_string(),
            is_college_email_verified: true,
        });
        step.load_context(&ctx);
        assert_eq!(step.active, Some(VariantKind::Student));
        assert!(step.otp.is_verified());
        assert_eq!(required_count(&step.student), 6);
    }

    #[test]
    fn department_slugs() {
        assert_eq!(department_slug("Computer Science"), "computer_science");
        assert_eq!(
            department_slug("International Business"),
            "international_business"
        );
    }
}
