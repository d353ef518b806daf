//! The demo data set: one user, six customers, thirteen invoices and a year
//! of revenue.

use time::{Date, macros::date};

use crate::invoice::InvoiceStatus;

pub(super) struct UserFixture {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    /// Plain text. Hashed before it is stored.
    pub password: &'static str,
}

pub(super) struct CustomerFixture {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: &'static str,
}

pub(super) struct InvoiceFixture {
    pub customer_id: &'static str,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
    pub date: Date,
}

pub(super) struct RevenueFixture {
    pub month: &'static str,
    pub revenue: i64,
}

pub(super) static USERS: [UserFixture; 1] = [UserFixture {
    id: "410544b2-4001-4271-9855-fec4b6a6442a",
    name: "User",
    email: "user@nextmail.com",
    password: "123456",
}];

const EVIL_RABBIT: &str = "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa";
const DELBA_DE_OLIVEIRA: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";
const LEE_ROBINSON: &str = "3958dc9e-742f-4377-85e9-fec4b6a6442a";
const MICHAEL_NOVOTNY: &str = "76d65c26-f784-44a2-ac19-586678f7c2f2";
const AMY_BURNS: &str = "cc27c14a-0acf-4f4a-a6c9-d45682c144b9";
const BALAZS_ORBAN: &str = "13d07535-c59e-4157-a011-f8d2ef4e0cbb";

pub(super) static CUSTOMERS: [CustomerFixture; 6] = [
    CustomerFixture {
        id: EVIL_RABBIT,
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: "/customers/evil-rabbit.png",
    },
    CustomerFixture {
        id: DELBA_DE_OLIVEIRA,
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: "/customers/delba-de-oliveira.png",
    },
    CustomerFixture {
        id: LEE_ROBINSON,
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: "/customers/lee-robinson.png",
    },
    CustomerFixture {
        id: MICHAEL_NOVOTNY,
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: "/customers/michael-novotny.png",
    },
    CustomerFixture {
        id: AMY_BURNS,
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: "/customers/amy-burns.png",
    },
    CustomerFixture {
        id: BALAZS_ORBAN,
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: "/customers/balazs-orban.png",
    },
];

const fn invoice(
    customer_id: &'static str,
    amount_in_cents: i64,
    status: InvoiceStatus,
    date: Date,
) -> InvoiceFixture {
    InvoiceFixture {
        customer_id,
        amount_in_cents,
        status,
        date,
    }
}

pub(super) static INVOICES: [InvoiceFixture; 13] = {
    use InvoiceStatus::{Paid, Pending};

    [
        invoice(EVIL_RABBIT, 15795, Pending, date!(2022 - 12 - 06)),
        invoice(DELBA_DE_OLIVEIRA, 20348, Pending, date!(2022 - 11 - 14)),
        invoice(AMY_BURNS, 3040, Paid, date!(2022 - 10 - 29)),
        invoice(MICHAEL_NOVOTNY, 44800, Paid, date!(2023 - 09 - 10)),
        invoice(BALAZS_ORBAN, 34577, Pending, date!(2023 - 08 - 05)),
        invoice(LEE_ROBINSON, 54246, Pending, date!(2023 - 07 - 16)),
        invoice(EVIL_RABBIT, 666, Pending, date!(2023 - 06 - 27)),
        invoice(MICHAEL_NOVOTNY, 32545, Paid, date!(2023 - 06 - 09)),
        invoice(AMY_BURNS, 1250, Paid, date!(2023 - 06 - 17)),
        invoice(BALAZS_ORBAN, 8546, Paid, date!(2023 - 06 - 07)),
        invoice(DELBA_DE_OLIVEIRA, 500, Paid, date!(2023 - 08 - 19)),
        invoice(BALAZS_ORBAN, 8945, Paid, date!(2023 - 06 - 03)),
        invoice(LEE_ROBINSON, 1000, Paid, date!(2022 - 06 - 05)),
    ]
};

pub(super) static REVENUE: [RevenueFixture; 12] = [
    RevenueFixture { month: "Jan", revenue: 2000 },
    RevenueFixture { month: "Feb", revenue: 1800 },
    RevenueFixture { month: "Mar", revenue: 2200 },
    RevenueFixture { month: "Apr", revenue: 2500 },
    RevenueFixture { month: "May", revenue: 2300 },
    RevenueFixture { month: "Jun", revenue: 3200 },
    RevenueFixture { month: "Jul", revenue: 3500 },
    RevenueFixture { month: "Aug", revenue: 3700 },
    RevenueFixture { month: "Sep", revenue: 2500 },
    RevenueFixture { month: "Oct", revenue: 2800 },
    RevenueFixture { month: "Nov", revenue: 3000 },
    RevenueFixture { month: "Dec", revenue: 4800 },
];
