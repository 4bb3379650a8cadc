use super::{escape, layout, BUTTON, INPUT};
use crate::auth::repo::User;
use crate::pickups::{repo::Pickup, status::PickupStatus};

const CARD: &str = "bg-white rounded-xl border border-gray-200 p-6 shadow-sm";
const CELL: &str = "py-2 pr-6";

fn field(id: &str, label: &str, kind: &str, placeholder: Option<&str>) -> String {
    let placeholder = placeholder
        .map(|p| format!(r#" placeholder="{}""#, escape(p)))
        .unwrap_or_default();
    format!(
        r#"<div>
                <label for="{id}" class="block text-sm font-medium text-gray-700">{label}</label>
                <input id="{id}" name="{id}" type="{kind}"{placeholder} required class="{INPUT}">
            </div>"#
    )
}

pub fn schedule_form(user: Option<&User>) -> String {
    let fields = [
        field("name", "Full Name", "text", None),
        field("email", "Email", "email", None),
        field("address", "Address", "text", None),
        field("item", "Item", "text", Some("e.g., Laptop")),
        field("date", "Preferred Date", "date", None),
    ]
    .concat();
    let body = format!(
        r#"<div class="max-w-2xl mx-auto px-4 py-10">
        <h1 class="text-2xl font-bold mb-6">Schedule Pickup</h1>
        <form method="post" action="/schedule" class="{CARD} space-y-4">
            {fields}
            <button id="scheduleSubmit" type="submit" class="{BUTTON}">Submit Request</button>
        </form>
    </div>"#
    );
    layout("Schedule Pickup", user, &body)
}

pub fn confirmation(user: Option<&User>, pickup: &Pickup) -> String {
    let body = format!(
        r#"<div class="max-w-xl mx-auto px-4 py-10">
        <div class="{CARD}">
            <h1 id="confirmMsg" class="text-xl font-semibold">Pickup request #{id} created for {name}</h1>
            <a id="myPickupsLink" href="/my-pickups" class="inline-block mt-4 text-emerald-700 hover:text-emerald-800 font-medium">View my requests</a>
        </div>
    </div>"#,
        id = pickup.id,
        name = escape(&pickup.name),
    );
    layout("Request Submitted", user, &body)
}

fn status_select(pickup: &Pickup) -> String {
    let options = PickupStatus::ALL
        .iter()
        .map(|s| {
            let selected = if *s == pickup.status { " selected" } else { "" };
            format!(r#"<option value="{s}"{selected}>{s}</option>"#)
        })
        .collect::<String>();
    format!(
        r#"<form method="post" action="/requests/{id}/status" class="flex items-center space-x-2">
                <select name="status" class="border rounded px-2 py-1">{options}</select>
                <button type="submit" class="text-emerald-700 font-medium">Update</button>
            </form>"#,
        id = pickup.id,
    )
}

fn table(id: &str, headers: &[&str], rows: String) -> String {
    let head = headers
        .iter()
        .map(|h| format!(r#"<th class="{CELL}">{h}</th>"#))
        .collect::<String>();
    format!(
        r#"<div class="{CARD}">
            <div class="overflow-x-auto">
                <table id="{id}" class="min-w-full text-left text-sm">
                    <thead class="text-gray-700"><tr>{head}</tr></thead>
                    <tbody class="divide-y divide-gray-100">{rows}</tbody>
                </table>
            </div>
        </div>"#
    )
}

fn cell(text: &str) -> String {
    format!(r#"<td class="{CELL}">{}</td>"#, escape(text))
}

pub fn admin_requests(user: &User, pickups: &[Pickup]) -> String {
    let rows = pickups
        .iter()
        .map(|p| {
            format!(
                r#"<tr>{}{}{}{}{}{}<td class="{CELL}">{}</td></tr>"#,
                cell(&p.id.to_string()),
                cell(&p.name),
                cell(&p.email),
                cell(&p.item),
                cell(&p.date),
                cell(p.status.as_str()),
                status_select(p),
            )
        })
        .collect::<String>();
    let body = format!(
        r#"<div class="max-w-6xl mx-auto px-4 py-10">
        <h1 class="text-2xl font-bold mb-6">Pickup Requests</h1>
        {}
    </div>"#,
        table(
            "requestsTable",
            &["ID", "Name", "Email", "Item", "Date", "Status", ""],
            rows
        )
    );
    layout("Admin - Requests", Some(user), &body)
}

pub fn my_pickups(user: &User, pickups: &[Pickup]) -> String {
    let rows = pickups
        .iter()
        .map(|p| {
            format!(
                "<tr>{}{}{}{}</tr>",
                cell(&p.id.to_string()),
                cell(&p.item),
                cell(&p.date),
                cell(p.status.as_str()),
            )
        })
        .collect::<String>();
    let body = format!(
        r#"<div class="max-w-6xl mx-auto px-4 py-10">
        <h1 class="text-2xl font-bold mb-6">My Pickups</h1>
        {}
    </div>"#,
        table("myPickupsTable", &["ID", "Item", "Date", "Status"], rows)
    );
    layout("My Pickups", Some(user), &body)
}
