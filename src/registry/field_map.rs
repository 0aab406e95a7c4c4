use crate::registry::model::{FieldRegistry, FieldSpec};

// ============================================================================
// Standard catalogue — Australian job-application fields
// ============================================================================
// Declaration order is matching precedence. Keywords are matched as
// case-insensitive substrings of the control hint; a single exclude hit
// vetoes the rule and evaluation falls through to the next entry.

fn spec(key: &str, keywords: &[&str], exclude: &[&str], description: &str) -> FieldSpec {
    FieldSpec::new(key, keywords, exclude, description)
}

impl FieldRegistry {
    /// The standard catalogue covering the fields seen across Seek, LinkedIn,
    /// GradConnection, Workday, Greenhouse, Lever, SmartRecruiters, PageUp and
    /// the HCM systems used by Big 4, banks and government.
    pub fn standard() -> FieldRegistry {
        FieldRegistry::new(vec![
            // ── Name ──────────────────────────────────────────────────
            spec(
                "f_firstName",
                &["first name", "first_name", "firstname", "given name", "given_name", "forename", "fname", "preferred first"],
                &["last", "family", "middle", "surname"],
                "Applicant's given (first) name",
            ),
            spec(
                "f_lastName",
                &["last name", "last_name", "lastname", "family name", "family_name", "surname", "lname"],
                &["first", "given", "middle"],
                "Applicant's family (last) name",
            ),
            spec(
                "f_preferredName",
                &["preferred name", "preferred_name", "nickname", "goes by", "known as", "name you prefer"],
                &["first", "last", "family"],
                "Name the applicant prefers to go by",
            ),
            spec(
                "f_pronouns",
                &["pronoun", "preferred pronoun", "gender pronoun"],
                &[],
                "Applicant's pronouns (e.g. she/her)",
            ),
            // ── Contact ───────────────────────────────────────────────
            spec(
                "f_phone",
                &["mobile", "phone", "telephone", "cell", "contact number", "phone number", "mobile number", "contact phone"],
                &["emergency", "referrer", "referee", "fax", "home phone", "work phone"],
                "Applicant's mobile phone number",
            ),
            spec(
                "f_email",
                &["email", "e-mail", "email address", "email_address"],
                &["emergency", "referrer", "referee", "manager", "supervisor", "confirm", "repeat"],
                "Applicant's email address",
            ),
            spec(
                "f_linkedin",
                &["linkedin", "linkedin url", "linkedin profile", "linked in"],
                &[],
                "LinkedIn profile URL",
            ),
            spec(
                "f_website",
                &["website", "portfolio", "personal website", "personal site", "web address", "url", "online portfolio"],
                &["linkedin", "github"],
                "Personal website or portfolio URL",
            ),
            spec(
                "f_github",
                &["github", "gitlab", "bitbucket", "code repository", "git url"],
                &[],
                "Code repository profile URL (GitHub or similar)",
            ),
            // ── Personal details ──────────────────────────────────────
            spec(
                "f_dob",
                &["date of birth", "dob", "birth date", "birthday", "born", "date_of_birth", "d.o.b"],
                &[],
                "Date of birth",
            ),
            spec(
                "f_gender",
                &["gender", "sex", "gender identity"],
                &["pronoun"],
                "Gender identity",
            ),
            spec(
                "f_indigenous",
                &["aboriginal", "torres strait", "indigenous", "atsi", "first nations", "identify as aboriginal"],
                &[],
                "Whether the applicant identifies as Aboriginal or Torres Strait Islander",
            ),
            spec(
                "f_disability",
                &["disability", "disabled", "accessibility need", "reasonable adjustment", "impairment"],
                &[],
                "Disability status or required reasonable adjustments",
            ),
            // ── Address ───────────────────────────────────────────────
            spec(
                "f_street",
                &["street", "address line 1", "address1", "street address", "unit", "flat", "house number", "residential address"],
                &["suburb", "city", "state", "postcode"],
                "Street address (first line)",
            ),
            // Present in the profile schema but never keyword-matched:
            // "address line 2" resolves to f_suburb by precedence.
            spec(
                "f_street2",
                &[],
                &[],
                "Street address second line (apartment or unit)",
            ),
            spec(
                "f_suburb",
                &["suburb", "city", "town", "locality", "address line 2", "address2", "city/suburb"],
                &["state", "country", "postcode"],
                "Suburb or city of residence",
            ),
            spec(
                "f_state",
                &["state", "state/territory", "territory", "province", "region"],
                &["country", "status"],
                "Australian state or territory of residence",
            ),
            spec(
                "f_postcode",
                &["postcode", "post code", "postal code", "zip", "zip code", "post_code"],
                &[],
                "Postcode",
            ),
            spec(
                "f_country",
                &["country", "country of residence", "nation"],
                &["nationality", "citizenship"],
                "Country of residence",
            ),
            spec(
                "f_relocate",
                &["reloc", "willing to relocate", "open to relocation", "can you relocate", "relocate for this role"],
                &[],
                "Willingness to relocate for the role",
            ),
            spec(
                "f_preferredLocation",
                &["preferred location", "preferred city", "preferred office", "location preference", "office preference", "where would you like to work"],
                &[],
                "Preferred work location or office",
            ),
            // ── Work rights ───────────────────────────────────────────
            spec(
                "f_workRights",
                &[
                    "work rights", "work_rights", "right to work", "working rights", "visa status",
                    "visa type", "citizenship status", "residency status", "work authorisation",
                    "work authorization", "employment eligibility", "citizen", "permanent resident",
                    "work entitlement", "immigration status",
                ],
                &["sponsorship", "security clearance"],
                "Australian work rights / visa status (e.g. citizen, permanent resident, visa subclass)",
            ),
            spec(
                "f_eligibleToWork",
                &["eligible to work", "legally entitled", "entitled to work", "authorised to work", "authorized to work", "lawfully permitted"],
                &[],
                "Whether the applicant is legally entitled to work in Australia (yes/no)",
            ),
            spec(
                "f_visaExpiry",
                &["visa expiry", "visa expiration", "visa end date", "permit expiry", "visa valid until"],
                &[],
                "Visa expiry date, if on a visa",
            ),
            spec(
                "f_workHours",
                &["work hours", "hours per week", "hours restriction", "maximum hours", "weekly hours limit", "visa work hours"],
                &[],
                "Maximum work hours per week permitted by visa conditions",
            ),
            spec(
                "f_sponsorship",
                &["sponsor", "visa sponsorship", "require sponsorship", "need sponsorship", "employer sponsorship", "immigration sponsorship"],
                &[],
                "Whether the applicant requires employer visa sponsorship",
            ),
            // ── Security & checks ─────────────────────────────────────
            spec(
                "f_clearance",
                &["security clearance", "clearance level", "nv1", "nv2", "baseline clearance", "positive vetting", "government clearance", "defence clearance"],
                &[],
                "Australian government security clearance held (e.g. Baseline, NV1, NV2)",
            ),
            spec(
                "f_policeCheck",
                &["police check", "criminal history", "national police check", "background check", "criminal record", "police clearance"],
                &[],
                "National police check / criminal history status",
            ),
            spec(
                "f_wwcc",
                &["working with children", "wwcc", "blue card", "child safe", "working with minors", "child protection check"],
                &[],
                "Working With Children Check number or status",
            ),
            // ── Education ─────────────────────────────────────────────
            spec(
                "f_degreeLevel",
                &["degree", "qualification", "degree level", "education level", "highest qualification", "highest education", "level of study", "degree type"],
                &["field", "major", "institution", "university", "school", "gpa", "wam", "grade", "year", "graduation"],
                "Highest degree or qualification level (e.g. Bachelor, Master)",
            ),
            spec(
                "f_fieldOfStudy",
                &["field of study", "major", "discipline", "subject", "course", "study area", "area of study", "programme", "program of study", "bachelor of", "master of"],
                &["institution", "university", "school", "year", "grade", "gpa"],
                "Field of study or major",
            ),
            spec(
                "f_university",
                &["university", "institution", "school", "college", "educational institution", "name of institution", "tertiary institution", "uni"],
                &["high school", "secondary", "prior", "previous", "other institution"],
                "University or institution name",
            ),
            spec(
                "f_gradYear",
                &["graduation year", "expected graduation", "year of graduation", "completing", "completion year", "graduate year", "grad year", "end year"],
                &["prior", "previous", "start", "enrol", "commence"],
                "Graduation year (actual or expected)",
            ),
            spec(
                "f_gpa",
                &["gpa", "wam", "grade point average", "weighted average mark", "academic average", "academic score", "average mark"],
                &[],
                "GPA or WAM (weighted average mark)",
            ),
            spec(
                "f_honours",
                &["honours", "honor", "grade classification", "degree classification", "distinction", "academic standing", "academic result"],
                &[],
                "Honours or degree classification",
            ),
            spec(
                "f_priorDegree",
                &["prior degree", "previous degree", "other degree", "additional qualification", "second degree", "undergraduate degree"],
                &["university", "institution", "year"],
                "Prior or additional degree held",
            ),
            spec(
                "f_priorUni",
                &["prior institution", "previous institution", "previous university", "prior university", "other institution"],
                &[],
                "Institution of the prior degree",
            ),
            spec(
                "f_priorGradYear",
                &["prior graduation", "previous graduation year", "prior year", "other grad year"],
                &[],
                "Graduation year of the prior degree",
            ),
            // ── Licence & certifications ──────────────────────────────
            spec(
                "f_licence",
                &["driver's licence", "drivers licence", "driver license", "drivers license", "driving licence", "driving license", "vehicle licence"],
                &["state", "number"],
                "Driver's licence held (e.g. full, provisional, none)",
            ),
            spec(
                "f_licenceState",
                &["licence state", "license state", "issuing state", "licence issuing"],
                &[],
                "State that issued the driver's licence",
            ),
            spec(
                "f_certs",
                &["certif", "certification", "licence number", "professional accreditation", "accreditation", "qualification number", "other certifications"],
                &[],
                "Professional certifications or accreditations",
            ),
            // ── Job preferences ───────────────────────────────────────
            spec(
                "f_desiredRole",
                &["desired role", "position applied", "job title", "role applied", "applying for", "position of interest", "target role"],
                &["referrer", "manager", "supervisor"],
                "Role or position being applied for",
            ),
            spec(
                "f_employmentType",
                &["employment type", "job type", "contract type", "engagement type", "type of employment", "work type", "position type", "full-time", "part-time", "casual"],
                &[],
                "Preferred employment type (full-time, part-time, casual, contract)",
            ),
            spec(
                "f_salary",
                &["salary", "remuneration", "compensation", "pay expectation", "salary expectation", "expected salary", "base salary", "annual salary", "total package", "ctc"],
                &[],
                "Salary expectation",
            ),
            spec(
                "f_startDate",
                &["start date", "available from", "earliest start", "when can you start", "commencement date", "available to start", "can start from"],
                &[],
                "Earliest available start date",
            ),
            spec(
                "f_notice",
                &["notice period", "notice required", "notice", "months notice", "weeks notice", "current notice period"],
                &[],
                "Notice period in the current role",
            ),
            spec(
                "f_workMode",
                &["work arrangement", "work mode", "hybrid", "remote", "on-site", "onsite", "in-office", "flexible work", "working arrangement"],
                &[],
                "Preferred working arrangement (on-site, hybrid, remote)",
            ),
            // ── Referral ──────────────────────────────────────────────
            spec(
                "f_referrerName",
                &["referr", "referred by", "referral name", "who referred", "name of referrer", "employee referral name", "internal referral"],
                &["email", "phone", "id", "number"],
                "Name of the employee who referred the applicant",
            ),
            spec(
                "f_referrerEmail",
                &["referrer email", "referral email", "referred by email", "employee email referral"],
                &[],
                "Email of the referring employee",
            ),
            spec(
                "f_hearAbout",
                &["hear about", "how did you hear", "how did you find", "how did you learn", "source", "recruitment source", "where did you hear", "application source", "referral source"],
                &[],
                "How the applicant heard about the role",
            ),
            // ── Cover letter / short answers ──────────────────────────
            spec(
                "f_whyUs",
                &["why do you want", "why this company", "why us", "why are you interested", "motivation", "reason for applying", "why apply", "what attracts you", "why would you like to work", "why this role"],
                &[],
                "Short answer: why the applicant wants this role/company",
            ),
            spec(
                "f_aboutMe",
                &["tell us about yourself", "about yourself", "brief introduction", "professional summary", "brief bio", "background", "introduce yourself", "brief overview"],
                &[],
                "Short answer: professional summary / about the applicant",
            ),
            spec(
                "f_strengths",
                &["strength", "key skill", "core skill", "competenc", "technical skill", "what skills", "expertise", "capabilities"],
                &[],
                "Short answer: key skills and strengths",
            ),
            // ── Emergency contact ─────────────────────────────────────
            spec(
                "f_emergencyName",
                &["emergency contact name", "emergency name", "next of kin name", "next of kin", "emergency contact person"],
                &["phone", "relationship", "number", "email"],
                "Emergency contact name",
            ),
            spec(
                "f_emergencyRel",
                &["emergency relationship", "relationship to you", "relation to applicant", "next of kin relationship", "emergency contact relationship"],
                &[],
                "Emergency contact relationship to the applicant",
            ),
            spec(
                "f_emergencyPhone",
                &["emergency contact phone", "emergency phone", "emergency number", "next of kin phone", "emergency contact number", "emergency mobile"],
                &[],
                "Emergency contact phone number",
            ),
            // ── Other admin ───────────────────────────────────────────
            spec(
                "f_studentId",
                &["student id", "student number", "student identifier", "university id", "student_id"],
                &[],
                "Student ID number",
            ),
            spec(
                "f_usi",
                &["usi", "unique student identifier"],
                &[],
                "Unique Student Identifier (USI)",
            ),
            spec(
                "f_tfn",
                &["tfn", "tax file number", "tax_file_number"],
                &[],
                "Australian tax file number",
            ),
            spec(
                "f_superFund",
                &["super fund", "superannuation fund", "super fund name", "superfund", "superannuation provider"],
                &["member", "number", "account"],
                "Superannuation fund name",
            ),
            spec(
                "f_superMember",
                &["super member", "member number", "superannuation member", "super account", "member account number"],
                &[],
                "Superannuation member number",
            ),
        ])
    }
}
