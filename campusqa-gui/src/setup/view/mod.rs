use iced::widget::scrollable;
use iced::{Alignment, Length};

use campusqa_ui::{
    component::{button, card, form, notification, tag, text::*},
    theme,
    widget::{Column, Container, Element, PickList, ProgressBar, Row},
};

use crate::setup::{
    message::{
        AlumniMessage, DesignationMessage, FacultyMessage, GeneralMessage, Message,
        PersonalMessage, PhotoMessage, StudentMessage,
    },
    step::{
        designation::{self, Program, StatusLevel, VariantKind},
        general,
        personal::Gender,
        StepId,
    },
    Level,
};

const LOW_TIME_SECS: u64 = 30;

const SELECTABLE: [StepId; 3] = [
    StepId::PersonalInfo,
    StepId::Designation,
    StepId::GeneralProfile,
];

pub fn layout<'a>(
    current: StepId,
    notice: Option<&'a (Level, String)>,
    email: Option<&'a str>,
    photo_path: &'a form::Value<String>,
    photo_processing: bool,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut selector = Column::new().spacing(5).width(Length::Fixed(220.0));
    for (i, id) in SELECTABLE.iter().enumerate() {
        let active = *id == current;
        let entry = if active {
            button::menu_active(id.title())
        } else {
            button::menu(id.title())
        }
        .width(Length::Fill);
        // the terminal step has no way back into the wizard
        selector = selector.push(entry.on_press_maybe(if current == StepId::Success {
            None
        } else {
            Some(Message::Select(i))
        }));
    }
    selector = selector
        .push(campusqa_ui::component::separation().width(Length::Fill))
        .push(photo_section(photo_path, photo_processing));

    let mut main = Column::new().spacing(20).width(Length::Fill);
    if let Some((level, message)) = notice {
        main = main.push(match level {
            Level::Success => notification::success(message.clone()),
            Level::Error => notification::error(message.clone(), None),
            Level::Info => notification::info(message.clone()),
        });
    }
    main = main
        .push(
            Row::new()
                .align_y(Alignment::Center)
                .push(
                    Container::new(ProgressBar::new(0.0..=100.0, current.progress()).height(10.0))
                        .width(Length::Fill),
                )
                .push_maybe(email.map(|e| {
                    Container::new(p1_regular(e).style(theme::text::success)).padding(10)
                })),
        )
        .push(content);

    Container::new(scrollable(
        Row::new()
            .spacing(30)
            .padding(30)
            .push(selector)
            .push(main),
    ))
    .height(Length::Fill)
    .width(Length::Fill)
    .style(theme::container::background)
    .into()
}

fn photo_section<'a>(
    path: &'a form::Value<String>,
    processing: bool,
) -> Column<'a, Message> {
    Column::new()
        .spacing(10)
        .push(p2_medium("Profile photo").style(theme::text::secondary))
        .push(
            form::Form::new("Path to an image file", path, |value| {
                Message::Photo(PhotoMessage::PathEdited(value))
            })
            .size(P2_SIZE)
            .padding(5),
        )
        .push(
            button::secondary(if processing { "Uploading..." } else { "Upload" })
                .width(Length::Fill)
                .on_press_maybe(if processing {
                    None
                } else {
                    Some(Message::Photo(PhotoMessage::Upload))
                }),
        )
}

pub fn step_frame<'a>(id: StepId, content: Element<'a, Message>) -> Element<'a, Message> {
    Column::new().spacing(30).push(h3(id.title())).push(content).into()
}

fn warning_view<'a>(warning: Option<&'a str>) -> Option<Container<'a, Message>> {
    warning.map(|w| notification::error(w.to_string(), None))
}

fn submit_row<'a>(processing: bool, submit: Message, label: &'static str) -> Row<'a, Message> {
    Row::new()
        .spacing(10)
        .push(
            button::primary(if processing { "Saving..." } else { label })
                .width(Length::Fixed(200.0))
                .on_press_maybe(if processing { None } else { Some(submit) }),
        )
        .push(
            button::transparent("Skip")
                .width(Length::Fixed(100.0))
                .on_press_maybe(if processing { None } else { Some(Message::Skip) }),
        )
}

#[allow(clippy::too_many_arguments)]
pub fn personal_info<'a>(
    processing: bool,
    warning: Option<&'a str>,
    full_name: &'a form::Value<String>,
    username: &'a form::Value<String>,
    email: &'a form::Value<String>,
    phone: &'a form::Value<String>,
    age: &'a form::Value<String>,
    gender: Option<Gender>,
) -> Element<'a, Message> {
    let msg = |f: fn(String) -> PersonalMessage| move |v| Message::Personal(f(v));
    let content = card::simple(
        Column::new()
            .spacing(20)
            .push_maybe(warning_view(warning))
            .push(
                form::Form::new("Full name", full_name, msg(PersonalMessage::FullNameEdited))
                    .id(crate::setup::step::personal::full_name_input_id())
                    .size(P1_SIZE)
                    .padding(10),
            )
            .push(
                form::Form::new_trimmed(
                    "Username",
                    username,
                    msg(PersonalMessage::UsernameEdited),
                )
                .size(P1_SIZE)
                .padding(10),
            )
            .push(
                form::Form::new_trimmed("Email", email, msg(PersonalMessage::EmailEdited))
                    .size(P1_SIZE)
                    .padding(10),
            )
            .push(
                form::Form::new_trimmed(
                    "Phone (optional)",
                    phone,
                    msg(PersonalMessage::PhoneEdited),
                )
                .size(P1_SIZE)
                .padding(10),
            )
            .push(
                form::Form::new_trimmed("Age", age, msg(PersonalMessage::AgeEdited))
                    .size(P1_SIZE)
                    .padding(10),
            )
            .push(
                PickList::new(&Gender::ALL[..], gender, |g| {
                    Message::Personal(PersonalMessage::GenderSelected(g))
                })
                .placeholder("Select gender")
                .width(Length::Fill)
                .padding(10),
            )
            .push(submit_row(
                processing,
                Message::Personal(PersonalMessage::Submit),
                "Continue",
            )),
    );
    step_frame(StepId::PersonalInfo, content.max_width(600).into())
}

pub fn designation(step: &designation::Designation) -> Element<Message> {
    let mut variants = Row::new().spacing(10);
    for kind in VariantKind::ALL {
        let label = match kind {
            VariantKind::Student => "Student",
            VariantKind::Faculty => "Faculty",
            VariantKind::Alumni => "Alumni",
        };
        let selected = step.active == Some(kind);
        variants = variants.push(
            if selected {
                button::primary(label)
            } else {
                button::secondary(label)
            }
            .width(Length::Fixed(150.0))
            .on_press(Message::Designation(DesignationMessage::SelectVariant(
                kind,
            ))),
        );
    }

    let form_view: Option<Element<Message>> = match step.active {
        Some(VariantKind::Student) => Some(student_form(step)),
        Some(VariantKind::Faculty) => Some(faculty_form(step)),
        Some(VariantKind::Alumni) => Some(alumni_form(step)),
        None => None,
    };

    let content = card::simple(
        Column::new()
            .spacing(20)
            .push_maybe(warning_view(step.warning.as_deref()))
            .push(variants)
            .push_maybe(form_view)
            .push(submit_row(
                step.processing,
                Message::Designation(DesignationMessage::Submit),
                "Continue",
            )),
    );
    step_frame(StepId::Designation, content.max_width(700).into())
}

fn student_form(step: &designation::Designation) -> Element<Message> {
    let student = &step.student;
    let selected_program = Program::from_slug(&student.program.value.value);
    let departments: Vec<String> = selected_program
        .map(|p| p.departments().iter().map(|d| d.to_string()).collect())
        .unwrap_or_default();
    let selected_department = departments
        .iter()
        .find(|d| designation::department_slug(d) == student.department.value.value)
        .cloned();

    Column::new()
        .spacing(20)
        .push(
            form::Form::new_trimmed(
                "Registration number",
                &student.registration_no.value,
                |v| {
                    Message::Designation(DesignationMessage::Student(
                        StudentMessage::RegistrationNoEdited(v),
                    ))
                },
            )
            .id(designation::registration_input_id())
            .size(P1_SIZE)
            .padding(10),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(
                    PickList::new(&Program::ALL[..], selected_program, |p| {
                        Message::Designation(DesignationMessage::Student(
                            StudentMessage::ProgramSelected(p),
                        ))
                    })
                    .placeholder("Select program")
                    .width(Length::Fill)
                    .padding(10),
                )
                .push(
                    PickList::new(departments.clone(), selected_department, |d| {
                        Message::Designation(DesignationMessage::Student(
                            StudentMessage::DepartmentSelected(d),
                        ))
                    })
                    .placeholder("Select department")
                    .width(Length::Fill)
                    .padding(10),
                ),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(
                    form::Form::new_trimmed(
                        "Current year",
                        &student.current_year.value,
                        |v| {
                            Message::Designation(DesignationMessage::Student(
                                StudentMessage::CurrentYearEdited(v),
                            ))
                        },
                    )
                    .size(P1_SIZE)
                    .padding(10),
                )
                .push(
                    form::Form::new_trimmed(
                        "Graduation year",
                        &student.graduation_year.value,
                        |v| {
                            Message::Designation(DesignationMessage::Student(
                                StudentMessage::GraduationYearEdited(v),
                            ))
                        },
                    )
                    .size(P1_SIZE)
                    .padding(10),
                ),
        )
        .push(otp_section(step))
        .into()
}

fn otp_section(step: &designation::Designation) -> Element<Message> {
    let otp = &step.otp;
    let email_entry = form::Form::new_trimmed(
        "College email",
        &step.student.college_email.value,
        |v| {
            Message::Designation(DesignationMessage::Student(
                StudentMessage::CollegeEmailEdited(v),
            ))
        },
    )
    .warning("Please enter a valid college email")
    .size(P1_SIZE)
    .padding(10);

    let mut col = Column::new().spacing(10).push(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(email_entry)
            .push(
                button::secondary(if step.otp_processing {
                    "Sending..."
                } else {
                    "Send OTP"
                })
                .width(Length::Fixed(150.0))
                .on_press_maybe(
                    if step.otp_processing || otp.is_counting() || otp.is_verified() {
                        None
                    } else {
                        Some(Message::Designation(DesignationMessage::SendOtp))
                    },
                ),
            ),
    );

    if let Some((level, status)) = &step.otp_status {
        col = col.push(text(status).style(match level {
            StatusLevel::Success => theme::text::success,
            StatusLevel::Error => theme::text::error,
        }));
    }

    if otp.is_counting() || otp.is_expired() {
        let timer = otp.remaining().map(|remaining| {
            let display = text(otp.format_remaining());
            if remaining < LOW_TIME_SECS {
                display.style(theme::text::error)
            } else {
                display
            }
        });
        let code_enabled = otp.is_counting() && !step.otp_processing;
        col = col.push(
            Row::new()
                .spacing(10)
                .align_y(Alignment::Center)
                .push(if code_enabled {
                    form::Form::new_trimmed("6-digit code", &step.code, |v| {
                        Message::Designation(DesignationMessage::OtpCodeEdited(v))
                    })
                    .on_submit(Message::Designation(DesignationMessage::VerifyOtp))
                    .warning("OTP must be 6 digits")
                    .size(P1_SIZE)
                    .padding(10)
                } else {
                    form::Form::new_disabled("6-digit code", &step.code)
                })
                .push_maybe(timer)
                .push(
                    button::primary(if step.otp_processing {
                        "Verifying..."
                    } else {
                        "Verify OTP"
                    })
                    .width(Length::Fixed(150.0))
                    .on_press_maybe(if code_enabled {
                        Some(Message::Designation(DesignationMessage::VerifyOtp))
                    } else {
                        None
                    }),
                )
                .push(
                    button::secondary("Resend OTP")
                        .width(Length::Fixed(150.0))
                        .on_press_maybe(if step.otp_processing || otp.is_counting() {
                            None
                        } else {
                            Some(Message::Designation(DesignationMessage::ResendOtp))
                        }),
                ),
        );
    }

    col.into()
}

fn faculty_form(step: &designation::Designation) -> Element<Message> {
    let faculty = &step.faculty;
    let msg = |f: fn(String) -> FacultyMessage| {
        move |v| Message::Designation(DesignationMessage::Faculty(f(v)))
    };
    Column::new()
        .spacing(20)
        .push(
            form::Form::new_trimmed(
                "Faculty ID",
                &faculty.faculty_id.value,
                msg(FacultyMessage::FacultyIdEdited),
            )
            .size(P1_SIZE)
            .padding(10),
        )
        .push(
            form::Form::new_trimmed(
                "Department",
                &faculty.department.value,
                msg(FacultyMessage::DepartmentEdited),
            )
            .size(P1_SIZE)
            .padding(10),
        )
        .push(
            form::Form::new_trimmed("Post", &faculty.post.value, msg(FacultyMessage::PostEdited))
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            form::Form::new(
                "Courses taught",
                &faculty.courses_taught.value,
                msg(FacultyMessage::CoursesEdited),
            )
            .size(P1_SIZE)
            .padding(10),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(
                    form::Form::new_trimmed(
                        "Office location",
                        &faculty.office_location.value,
                        msg(FacultyMessage::OfficeEdited),
                    )
                    .size(P1_SIZE)
                    .padding(10),
                )
                .push(
                    form::Form::new_trimmed(
                        "Years of experience",
                        &faculty.experience.value,
                        msg(FacultyMessage::ExperienceEdited),
                    )
                    .size(P1_SIZE)
                    .padding(10),
                ),
        )
        .push(
            form::Form::new(
                "Research interests (optional)",
                &faculty.research.value,
                msg(FacultyMessage::ResearchEdited),
            )
            .size(P1_SIZE)
            .padding(10),
        )
        .into()
}

fn alumni_form(step: &designation::Designation) -> Element<Message> {
    let alumni = &step.alumni;
    let selected_program = Program::from_slug(&alumni.program.value.value);
    let departments: Vec<String> = selected_program
        .map(|p| p.departments().iter().map(|d| d.to_string()).collect())
        .unwrap_or_default();
    let selected_department = departments
        .iter()
        .find(|d| designation::department_slug(d) == alumni.department.value.value)
        .cloned();
    let msg = |f: fn(String) -> AlumniMessage| {
        move |v| Message::Designation(DesignationMessage::Alumni(f(v)))
    };

    Column::new()
        .spacing(20)
        .push(
            form::Form::new_trimmed(
                "Graduation year",
                &alumni.graduation_year.value,
                msg(AlumniMessage::GraduationYearEdited),
            )
            .size(P1_SIZE)
            .padding(10),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(
                    PickList::new(&Program::ALL[..], selected_program, |p| {
                        Message::Designation(DesignationMessage::Alumni(
                            AlumniMessage::ProgramSelected(p),
                        ))
                    })
                    .placeholder("Select program")
                    .width(Length::Fill)
                    .padding(10),
                )
                .push(
                    PickList::new(departments.clone(), selected_department, |d| {
                        Message::Designation(DesignationMessage::Alumni(
                            AlumniMessage::DepartmentSelected(d),
                        ))
                    })
                    .placeholder("Select department")
                    .width(Length::Fill)
                    .padding(10),
                ),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(
                    form::Form::new(
                        "Job title",
                        &alumni.job_title.value,
                        msg(AlumniMessage::JobTitleEdited),
                    )
                    .size(P1_SIZE)
                    .padding(10),
                )
                .push(
                    form::Form::new(
                        "Company",
                        &alumni.company_name.value,
                        msg(AlumniMessage::CompanyEdited),
                    )
                    .size(P1_SIZE)
                    .padding(10),
                ),
        )
        .push(
            form::Form::new_trimmed(
                "LinkedIn (optional)",
                &alumni.linkedin.value,
                msg(AlumniMessage::LinkedinEdited),
            )
            .size(P1_SIZE)
            .padding(10),
        )
        .into()
}

pub fn general_profile(step: &general::GeneralProfile) -> Element<Message> {
    let skills = tag_row(step.skills.tags(), |i| {
        Message::General(GeneralMessage::SkillRemoved(i))
    });
    let interests = tag_row(step.interests.tags(), |i| {
        Message::General(GeneralMessage::InterestRemoved(i))
    });

    let content = card::simple(
        Column::new()
            .spacing(20)
            .push_maybe(warning_view(step.warning.as_deref()))
            .push(
                form::Form::new("Short bio", &step.bio, |v| {
                    Message::General(GeneralMessage::BioEdited(v))
                })
                .id(general::bio_input_id())
                .size(P1_SIZE)
                .padding(10),
            )
            .push(p2_medium("Skills").style(theme::text::secondary))
            .push_maybe(skills)
            .push(
                form::Form::new_trimmed("Add a skill and press Enter", &step.skills.input, |v| {
                    Message::General(GeneralMessage::SkillInputEdited(v))
                })
                .on_submit(Message::General(GeneralMessage::SkillAdded))
                .size(P1_SIZE)
                .padding(10),
            )
            .push(p2_medium("Interests").style(theme::text::secondary))
            .push_maybe(interests)
            .push(
                form::Form::new_trimmed(
                    "Add an interest and press Enter",
                    &step.interests.input,
                    |v| Message::General(GeneralMessage::InterestInputEdited(v)),
                )
                .on_submit(Message::General(GeneralMessage::InterestAdded))
                .size(P1_SIZE)
                .padding(10),
            )
            .push(
                Row::new()
                    .spacing(10)
                    .push(
                        form::Form::new_trimmed("LinkedIn (optional)", &step.linkedin, |v| {
                            Message::General(GeneralMessage::LinkedinEdited(v))
                        })
                        .size(P1_SIZE)
                        .padding(10),
                    )
                    .push(
                        form::Form::new_trimmed("GitHub (optional)", &step.github, |v| {
                            Message::General(GeneralMessage::GithubEdited(v))
                        })
                        .size(P1_SIZE)
                        .padding(10),
                    )
                    .push(
                        form::Form::new_trimmed("Portfolio (optional)", &step.portfolio, |v| {
                            Message::General(GeneralMessage::PortfolioEdited(v))
                        })
                        .size(P1_SIZE)
                        .padding(10),
                    ),
            )
            .push(submit_row(
                step.processing,
                Message::General(GeneralMessage::Submit),
                "Submit profile",
            )),
    );
    step_frame(StepId::GeneralProfile, content.max_width(700).into())
}

fn tag_row<'a>(
    tags: &'a [String],
    on_remove: impl Fn(usize) -> Message + 'a,
) -> Option<Row<'a, Message>> {
    if tags.is_empty() {
        return None;
    }
    let mut row = Row::new().spacing(5);
    for (i, label) in tags.iter().enumerate() {
        row = row.push(tag::removable(label, on_remove(i)));
    }
    Some(row)
}
