use crate::services::portal::{api, ApiError};
use crate::setup::step::{
    designation::{Program, VariantKind},
    personal::Gender,
};

#[derive(Debug, Clone)]
pub enum Message {
    /// Step-selector click; revisiting an earlier step is allowed.
    Select(usize),
    /// Successful submission (or an explicit skip) advances the wizard.
    Next,
    Skip,
    Loaded(Result<api::ProfileData, ApiError>),
    Personal(PersonalMessage),
    Designation(DesignationMessage),
    General(GeneralMessage),
    Photo(PhotoMessage),
    // Terminal, handled by the upper level.
    GoHome,
}

#[derive(Debug, Clone)]
pub enum PersonalMessage {
    FullNameEdited(String),
    UsernameEdited(String),
    EmailEdited(String),
    PhoneEdited(String),
    AgeEdited(String),
    GenderSelected(Gender),
    Submit,
    Saved(Result<(), ApiError>),
}

#[derive(Debug, Clone)]
pub enum DesignationMessage {
    SelectVariant(VariantKind),
    Student(StudentMessage),
    Faculty(FacultyMessage),
    Alumni(AlumniMessage),
    SendOtp,
    ResendOtp,
    OtpCodeEdited(String),
    VerifyOtp,
    OtpSent(Result<api::CollegeOtp, ApiError>),
    OtpVerifyResult(Result<(), ApiError>),
    Tick,
    Submit,
    Saved(Result<(), ApiError>),
}

#[derive(Debug, Clone)]
pub enum StudentMessage {
    RegistrationNoEdited(String),
    ProgramSelected(Program),
    DepartmentSelected(String),
    CurrentYearEdited(String),
    GraduationYearEdited(String),
    CollegeEmailEdited(String),
}

#[derive(Debug, Clone)]
pub enum FacultyMessage {
    FacultyIdEdited(String),
    DepartmentEdited(String),
    PostEdited(String),
    CoursesEdited(String),
    OfficeEdited(String),
    ExperienceEdited(String),
    ResearchEdited(String),
}

#[derive(Debug, Clone)]
pub enum AlumniMessage {
    GraduationYearEdited(String),
    ProgramSelected(Program),
    DepartmentSelected(String),
    JobTitleEdited(String),
    CompanyEdited(String),
    LinkedinEdited(String),
}

#[derive(Debug, Clone)]
pub enum GeneralMessage {
    BioEdited(String),
    SkillInputEdited(String),
    SkillAdded,
    SkillRemoved(usize),
    InterestInputEdited(String),
    InterestAdded,
    InterestRemoved(usize),
    LinkedinEdited(String),
    GithubEdited(String),
    PortfolioEdited(String),
    Submit,
    Saved(Result<(), ApiError>),
}

#[derive(Debug, Clone)]
pub enum PhotoMessage {
    PathEdited(String),
    Upload,
    Uploaded(Result<(), String>),
}
