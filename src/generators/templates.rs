//! Fixed legal content for the offer letter and annexures.
//!
//! The letter body has exactly two substitution points (designation and
//! date of joining); everything else - the signature block and the four
//! annexures - is constant across all submissions. Editing the legal text
//! means editing these constants; assembly logic does not change.

use crate::application::model::ApplicationForm;

pub const COMPANY_NAME: &str = "Codryl Technologies Pvt. Ltd.";

pub const COMPANY_ADDRESS_LINES: [&str; 2] = [
    "Shree Complex, P&T Colony, Dombivli East,",
    "421201, Maharashtra, India",
];

pub const SUBJECT_LINE: &str = "Sub: Offer of Employment";

const OFFER_LETTER_BODY: &str = "\
We are pleased to offer you the position of {designation} at Codryl Technologies Pvt. Ltd. \
Your skills and experience are an excellent match for our team, and we look forward to having you join us. \
Please find the details of your employment below:\n\
\n\
1. Position:\n\
You will be employed as an {designation}. Your responsibilities will include, but are not limited to, \
developing and maintaining mobile applications as per the project requirements provided by the company.\n\
\n\
2. Start Date:\n\
Your expected start date is {date_of_joining}, subject to successful completion of all pre-employment checks.\n\
\n\
3. Compensation:\n\
This position is based on a 'Get Paid as You Work' payment model. You will receive compensation upon the successful \
completion of each project assigned to you. The detailed payment structure is provided in Annexure 1.\n\
\n\
4. Work Location:\n\
You will be working remotely (Work From Home), with all communication and deliverables to be managed online as per the company's \
work-from-home policy detailed in Annexure 2.\n\
\n\
5. Employment Type:\n\
This is a contractual position where your employment is tied to the duration of your projects. The company reserves the right to \
assign you to various projects as per business needs.\n\
\n\
6. Code of Conduct and Company Policies:\n\
You are required to adhere to the rules and regulations of the company, including but not limited to confidentiality, data protection, \
and intellectual property rights. Your adherence to company policies is crucial for your continued employment.\n\
\n\
7. Termination:\n\
This contract can be terminated by either party with a written notice of [Notice Period] days. The company reserves the right to terminate \
employment immediately for any breach of company policies, failure to meet the required performance standards, or violation of any terms \
mentioned in the annexures.\n\
\n\
8. Work Schedule:\n\
You will have a flexible working schedule, with the requirement to work 8 hours a day for 5 days a week. You may choose any two days as \
your week off, provided you inform your manager one week in advance. Mandatory attendance at scheduled meetings is required, and failure \
to attend can lead to penalties.\n\
\n\
9. Daily Project Updates:\n\
You are required to submit project updates daily on the employee portal. Failure to do so may result in penalties.\n\
\n\
10. Data Security and Client Communication:\n\
Data security is of utmost importance. Any breach or leakage of client data will result in immediate termination. Direct communication with clients \
without prior approval from your manager is strictly prohibited and will lead to a 180-day suspension.\n\
\n\
11. Absconding and Notice Period:\n\
Failure to serve the notice period or absconding from the company will lead to permanent termination from employment at Codryl Technologies Pvt. Ltd.\n\
\n\
12. Post-Project Responsibilities:\n\
Upon completion of the project, you are required to submit all the deliverables and transfer all rights to the company. Failure to submit the project \
will result in penalties.\n\
\n\
13. Project Submission and Penalties:\n\
Delays in project submission will attract penalties. The severity of the penalty will depend on the extent of the delay.\n\
\n\
We are excited to have you as a part of our team. Please review the attached annexures for detailed policies and procedures. If you agree to the terms \
and conditions outlined in this offer, please sign and return a copy of this letter along with the annexures.";

pub const SIGNATURE_BLOCK: &str = "\
Sincerely,\n\
\n\
Adarsh Suradkar\n\
Devendra Ambre\n\
CEO, Founder\n\
Codryl Technologies Pvt. Ltd.\n\
Authorized Signatory";

/// Annexure filename paired with its fixed body text.
pub const ANNEXURES: [(&str, &str); 4] = [
    (
        "Annexure_1_Payment_Structure.pdf",
        "Annexure 1: Payment Structure\n\
        \n\
        - Payment for each project will be processed upon successful completion and approval of the deliverables by the client and the company.\n\
        - Payment will be calculated based on the project scope, complexity, and agreed-upon terms before project initiation.\n\
        - Any delay in project submission will result in a penalty, deducted from your payment based on the severity of the delay.\n\
        - All payments will be made in accordance with the completion timelines agreed upon at the start of each project.",
    ),
    (
        "Annexure_2_Work_From_Home_Policy.pdf",
        "Annexure 2: Work From Home Policy\n\
        \n\
        - You are required to work remotely from your home or any location of your choice, provided that you have a stable internet connection and the necessary tools to complete your tasks.\n\
        - Regular communication via email, chat, and video conferencing is mandatory.\n\
        - You must adhere to project deadlines and be available during the core working hours.\n\
        - All work-related data must be stored securely and in compliance with company policies.",
    ),
    (
        "Annexure_3_Payment_Policy.pdf",
        "Annexure 3: Payment Policy\n\
        \n\
        - All payments will be processed through bank transfers to the account details provided by you at the time of joining.\n\
        - You are required to maintain an updated bank account on file with the company to ensure timely payments.\n\
        - Payment processing time may vary, but typically payments will be made within 5 Days of project completion and approval.",
    ),
    (
        "Annexure_4_No_Call_No_Show_Policy.pdf",
        "Annexure 4: No Call No Show Policy\n\
        \n\
        - If you fail to respond to company communications for 7 consecutive days without prior notice or approval, it will be considered a 'No Call No Show' violation.\n\
        - Under this policy, your employment will be terminated immediately, and no further compensation will be provided.\n\
        - Continuous or repeated violations of this policy may result in permanent disqualification from future employment opportunities with Codryl Technologies Pvt. Ltd.",
    ),
];

/// Build the offer letter narrative for one application.
///
/// Only designation and date of joining feed into the legal text; both are
/// whitespace-trimmed, nothing else is substituted.
pub fn offer_letter_body(form: &ApplicationForm) -> String {
    OFFER_LETTER_BODY
        .replace("{designation}", form.designation.trim())
        .replace("{date_of_joining}", form.date_of_joining.trim())
}
