//! Payments toolset.

use super::{COUNT, FROM, HttpMethod, Param, ParamKind, SKIP, TO, ToolSpec};

const PAYMENT_ID: Param = Param::required(
    "payment_id",
    ParamKind::String,
    "Unique identifier of the payment (starts with pay_)",
);

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "fetch_payment",
        description: "Use this tool to retrieve the details of a specific payment using its id. \
                      Amount returned is in paisa",
        method: HttpMethod::Get,
        path: "/payments/{payment_id}",
        params: &[PAYMENT_ID],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_payment_card_details",
        description: "Use this tool to retrieve the details of the card used to make a payment. \
                      Only works for payments made using a card.",
        method: HttpMethod::Get,
        path: "/payments/{payment_id}/card",
        params: &[PAYMENT_ID],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_all_payments",
        description: "Fetch all payments with optional filtering and pagination",
        method: HttpMethod::Get,
        path: "/payments",
        params: &[COUNT, SKIP, FROM, TO],
        read_only: true,
    },
    ToolSpec {
        name: "capture_payment",
        description: "Use this tool to capture a previously authorized payment. \
                      The amount must match the authorized amount.",
        method: HttpMethod::Post,
        path: "/payments/{payment_id}/capture",
        params: &[
            PAYMENT_ID,
            Param::required(
                "amount",
                ParamKind::Integer,
                "Amount to capture in the smallest currency sub-unit (e.g. 100 paise = 1 INR)",
            ),
            Param::required("currency", ParamKind::String, "ISO code of the currency (e.g. INR)"),
        ],
        read_only: false,
    },
    ToolSpec {
        name: "update_payment",
        description: "Use this tool to update the notes field of a payment. \
                      Notes are key-value pairs for storing additional information.",
        method: HttpMethod::Patch,
        path: "/payments/{payment_id}",
        params: &[
            PAYMENT_ID,
            Param::required(
                "notes",
                ParamKind::Object,
                "Key-value pairs to store on the payment (max 15 pairs, 256 chars each)",
            ),
        ],
        read_only: false,
    },
];

