//! QR codes toolset.

use super::{COUNT, FROM, HttpMethod, NOTES, Param, ParamKind, SKIP, TO, ToolSpec};

const QR_CODE_ID: Param = Param::required(
    "qr_code_id",
    ParamKind::String,
    "Unique identifier of the QR code (starts with qr_)",
);

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "create_qr_code",
        description: "Create a new QR code in Razorpay that can be used to accept UPI payments",
        method: HttpMethod::Post,
        path: "/payments/qr_codes",
        params: &[
            Param::required("type", ParamKind::String, "The type of the QR code; only 'upi_qr' is supported"),
            Param::optional("name", ParamKind::String, "Label for the QR code (e.g. 'Store Front Display')"),
            Param::required(
                "usage",
                ParamKind::String,
                "Whether the QR code accepts one payment ('single_use') or many ('multiple_use')",
            ),
            Param::optional(
                "fixed_amount",
                ParamKind::Boolean,
                "Whether the QR code only accepts payments of payment_amount",
            ),
            Param::optional(
                "payment_amount",
                ParamKind::Integer,
                "Amount allowed in the smallest currency sub-unit (required if fixed_amount is true)",
            ),
            Param::optional("description", ParamKind::String, "A brief description of the QR code"),
            Param::optional("customer_id", ParamKind::String, "Id of the customer the QR code is linked to"),
            Param::optional("close_by", ParamKind::Integer, "Unix timestamp at which the QR code closes"),
            NOTES,
        ],
        read_only: false,
    },
    ToolSpec {
        name: "fetch_qr_code",
        description: "Fetch a QR code's details using its id",
        method: HttpMethod::Get,
        path: "/payments/qr_codes/{qr_code_id}",
        params: &[QR_CODE_ID],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_all_qr_codes",
        description: "Fetch all QR codes with optional filtering and pagination",
        method: HttpMethod::Get,
        path: "/payments/qr_codes",
        params: &[
            FROM,
            TO,
            COUNT,
            SKIP,
            Param::optional("customer_id", ParamKind::String, "Filter QR codes by customer id"),
            Param::optional("payment_id", ParamKind::String, "Filter QR codes by payment id"),
        ],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_payments_for_qr_code",
        description: "Fetch all payments received on a QR code",
        method: HttpMethod::Get,
        path: "/payments/qr_codes/{qr_code_id}/payments",
        params: &[QR_CODE_ID, FROM, TO, COUNT, SKIP],
        read_only: true,
    },
    ToolSpec {
        name: "close_qr_code",
        description: "Close a QR code so that it no longer accepts payments",
        method: HttpMethod::Post,
        path: "/payments/qr_codes/{qr_code_id}/close",
        params: &[QR_CODE_ID],
        read_only: false,
    },
];
