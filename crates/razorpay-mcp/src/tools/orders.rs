//! Orders toolset.

use super::{COUNT, FROM, HttpMethod, NOTES, Param, ParamKind, SKIP, TO, ToolSpec};

const ORDER_ID: Param = Param::required(
    "order_id",
    ParamKind::String,
    "Unique identifier of the order (starts with order_)",
);

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "create_order",
        description: "Create a new order in Razorpay. Amount is in the smallest currency sub-unit.",
        method: HttpMethod::Post,
        path: "/orders",
        params: &[
            Param::required(
                "amount",
                ParamKind::Integer,
                "Payment amount in the smallest currency sub-unit (e.g. for 295 INR, use 29500)",
            ),
            Param::required("currency", ParamKind::String, "ISO code for the currency (e.g. INR)"),
            Param::optional(
                "receipt",
                ParamKind::String,
                "Receipt number for internal reference (max 40 chars, must be unique)",
            ),
            NOTES,
            Param::optional(
                "partial_payment",
                ParamKind::Boolean,
                "Whether the customer can make partial payments",
            ),
            Param::optional(
                "first_payment_min_amount",
                ParamKind::Integer,
                "Minimum amount for the first partial payment (only with partial_payment)",
            ),
        ],
        read_only: false,
    },
    ToolSpec {
        name: "fetch_order",
        description: "Fetch an order's details using its id",
        method: HttpMethod::Get,
        path: "/orders/{order_id}",
        params: &[ORDER_ID],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_all_orders",
        description: "Fetch all orders with optional filtering and pagination",
        method: HttpMethod::Get,
        path: "/orders",
        params: &[
            COUNT,
            SKIP,
            FROM,
            TO,
            Param::optional(
                "authorized",
                ParamKind::Integer,
                "Filter orders with authorized payments (1) or without (0)",
            ),
            Param::optional("receipt", ParamKind::String, "Filter orders by receipt"),
        ],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_order_payments",
        description: "Fetch all payments made for a specific order",
        method: HttpMethod::Get,
        path: "/orders/{order_id}/payments",
        params: &[ORDER_ID],
        read_only: true,
    },
    ToolSpec {
        name: "update_order",
        description: "Use this tool to update an order. Only the notes field can be modified.",
        method: HttpMethod::Patch,
        path: "/orders/{order_id}",
        params: &[
            ORDER_ID,
            Param::required(
                "notes",
                ParamKind::Object,
                "Key-value pairs to store on the order (max 15 pairs, 256 chars each)",
            ),
        ],
        read_only: false,
    },
];
