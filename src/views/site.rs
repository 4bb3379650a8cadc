use super::layout;
use crate::auth::repo::User;

pub struct Center {
    pub name: &'static str,
    pub city: &'static str,
    pub contact: &'static str,
}

/// Authorized recycling partners shown on `/centers`.
pub const CENTERS: [Center; 3] = [
    Center {
        name: "GreenTech Recycling",
        city: "Pune",
        contact: "+91-9876543210",
    },
    Center {
        name: "EcoCycle Hub",
        city: "Mumbai",
        contact: "+91-9000012345",
    },
    Center {
        name: "RenewIT",
        city: "Bengaluru",
        contact: "+91-9123456780",
    },
];

const CARD: &str = "bg-white rounded-xl border border-gray-200 p-6 shadow-sm";

pub fn home(user: Option<&User>) -> String {
    let features = [
        ("Certified Centers", "Find vetted e-waste collection partners near you."),
        ("Convenient Pickup", "Choose a date and we'll handle the rest."),
        ("Safe Disposal", "Your devices are recycled following best practices."),
    ]
    .iter()
    .map(|(title, text)| {
        format!(
            r#"<div class="{CARD}">
                <h2 class="text-lg font-semibold">{title}</h2>
                <p class="mt-2 text-sm text-gray-600">{text}</p>
            </div>"#
        )
    })
    .collect::<String>();

    let body = format!(
        r#"<header class="bg-gradient-to-r from-emerald-500 to-teal-600 text-white">
        <div class="max-w-6xl mx-auto px-4 py-16">
            <h1 class="text-3xl md:text-4xl font-bold">Responsible E-Waste Management</h1>
            <p class="mt-3 text-emerald-50 max-w-2xl">Schedule safe pickup of electronic waste and find nearby authorized centers.</p>
            <a href="/schedule" class="inline-block mt-6 bg-white text-emerald-700 font-semibold px-5 py-3 rounded-lg shadow hover:shadow-md">Schedule a Pickup</a>
        </div>
    </header>
    <main class="max-w-6xl mx-auto px-4 py-10">
        <div class="grid gap-6 md:grid-cols-3">{features}</div>
    </main>"#
    );
    layout("E-Waste Management", user, &body)
}

pub fn centers(user: Option<&User>) -> String {
    let rows = CENTERS
        .iter()
        .map(|c| {
            format!(
                r#"<tr><td class="py-2 pr-6">{}</td><td class="py-2 pr-6">{}</td><td class="py-2 pr-6">{}</td></tr>"#,
                c.name, c.city, c.contact
            )
        })
        .collect::<String>();

    let body = format!(
        r#"<div class="max-w-6xl mx-auto px-4 py-10">
        <h1 class="text-2xl font-bold mb-6">Authorized Centers</h1>
        <div class="{CARD}">
            <div class="overflow-x-auto">
                <table id="centersTable" class="min-w-full text-left text-sm">
                    <thead class="text-gray-700">
                        <tr>
                            <th class="py-2 pr-6">Name</th>
                            <th class="py-2 pr-6">City</th>
                            <th class="py-2 pr-6">Contact</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">{rows}</tbody>
                </table>
            </div>
        </div>
    </div>"#
    );
    layout("Centers", user, &body)
}
