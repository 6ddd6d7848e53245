//! Payment links toolset.

use super::{COUNT, HttpMethod, NOTES, Param, ParamKind, SKIP, ToolSpec};

const PAYMENT_LINK_ID: Param = Param::required(
    "payment_link_id",
    ParamKind::String,
    "Unique identifier of the payment link (starts with plink_)",
);

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "create_payment_link",
        description: "Create a new standard payment link in Razorpay with a specified amount",
        method: HttpMethod::Post,
        path: "/payment_links",
        params: &[
            Param::required(
                "amount",
                ParamKind::Integer,
                "Amount to be paid in the smallest currency sub-unit (e.g. 300 INR = 30000)",
            ),
            Param::required("currency", ParamKind::String, "Three-letter ISO code for the currency"),
            Param::optional("description", ParamKind::String, "A brief description of the link"),
            Param::optional("reference_id", ParamKind::String, "Reference number for your records"),
            Param::optional(
                "accept_partial",
                ParamKind::Boolean,
                "Whether the customer can make partial payments",
            ),
            Param::optional(
                "first_min_partial_amount",
                ParamKind::Integer,
                "Minimum amount for the first partial payment",
            ),
            Param::optional(
                "expire_by",
                ParamKind::Integer,
                "Unix timestamp after which the link expires",
            ),
            Param::optional(
                "customer",
                ParamKind::Object,
                "Customer details: name, email and contact",
            ),
            Param::optional(
                "notify",
                ParamKind::Object,
                "Notification channels: {\"sms\": bool, \"email\": bool}",
            ),
            Param::optional(
                "reminder_enable",
                ParamKind::Boolean,
                "Send reminders for the payment link",
            ),
            NOTES,
            Param::optional(
                "callback_url",
                ParamKind::String,
                "URL to redirect the customer to after payment",
            ),
            Param::optional(
                "callback_method",
                ParamKind::String,
                "HTTP method for the callback redirection (get)",
            ),
        ],
        read_only: false,
    },
    ToolSpec {
        name: "fetch_payment_link",
        description: "Fetch payment link details using its id. \
                      Response contains the basic details like amount, status etc",
        method: HttpMethod::Get,
        path: "/payment_links/{payment_link_id}",
        params: &[PAYMENT_LINK_ID],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_all_payment_links",
        description: "Fetch all payment links with optional filtering by payment id or reference id",
        method: HttpMethod::Get,
        path: "/payment_links",
        params: &[
            Param::optional("payment_id", ParamKind::String, "Payment id associated with the link"),
            Param::optional("reference_id", ParamKind::String, "Reference id used when creating the link"),
            COUNT,
            SKIP,
        ],
        read_only: true,
    },
    ToolSpec {
        name: "update_payment_link",
        description: "Update a payment link with new details such as reference id, \
                      expiry date or notes.",
        method: HttpMethod::Patch,
        path: "/payment_links/{payment_link_id}",
        params: &[
            PAYMENT_LINK_ID,
            Param::optional("reference_id", ParamKind::String, "Reference number for your records"),
            Param::optional(
                "expire_by",
                ParamKind::Integer,
                "Unix timestamp after which the link expires",
            ),
            Param::optional(
                "reminder_enable",
                ParamKind::Boolean,
                "Send reminders for the payment link",
            ),
            Param::optional(
                "accept_partial",
                ParamKind::Boolean,
                "Whether the customer can make partial payments",
            ),
            NOTES,
        ],
        read_only: false,
    },
    ToolSpec {
        name: "send_payment_link",
        description: "Send or resend a notification for a payment link via sms or email.",
        method: HttpMethod::Post,
        path: "/payment_links/{payment_link_id}/notify_by/{medium}",
        params: &[
            PAYMENT_LINK_ID,
            Param::required(
                "medium",
                ParamKind::String,
                "Medium to send the notification through: 'sms' or 'email'",
            ),
        ],
        read_only: false,
    },
];
