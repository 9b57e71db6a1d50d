//! Embedded campus route timetables.

/// A stop as it appears in the timetable: pickup name and "H:MM AM" time.
pub type TimetableStop = (&'static str, &'static str);

/// The campus routes, in catalog order.
pub const RAW_ROUTES: &[(&str, &[TimetableStop])] = &[
    (
        "VV-1",
        &[
            ("Kankipadu", "7:25 AM"),
            ("Gosala", "7:30 AM"),
            ("Edupugallu", "7:32 AM"),
            ("Penamaluru", "7:40 AM"),
            ("Poranki", "7:45 AM"),
            ("VIT -AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-2",
        &[
            ("Poranki Center", "7:40 AM"),
            ("Thumu Center", "7:43 AM"),
            ("Tadigadapa", "7:45 AM"),
            ("KCP Colony", "7:48 AM"),
            ("VR Siddhartha", "7:50 AM"),
            ("Bharath Pertol Pump", "7:52 AM"),
            ("Kamayvathopu Centre", "7:55 AM"),
            ("Time Hospital", "8:00 AM"),
            ("VIT -AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-3",
        &[
            ("Kamayatopu Center", "7:40 AM"),
            ("Pappula Mill Center", "7:42 AM"),
            ("Ashok Nagar", "7:45 AM"),
            ("Time Hospital", "7:47 AM"),
            ("Auto nagar Gate", "7:48 AM"),
            ("Screw Bridge", "7:58 AM"),
            ("VIT -AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-10",
        &[
            ("Nunna Center", "7:30 AM"),
            ("Sub Station", "7:40 AM"),
            ("Kandika Pertol Pump", "7:45 AM"),
            ("Payakapuram", "7:50 AM"),
            ("Prakash Nagar", "7:52 AM"),
            ("Pipula Road", "7:55 AM"),
            ("Singh Nagar Sai Baba Temple", "7:58 AM"),
            ("Dabakotlu Center", "8:00 AM"),
            ("VIT -AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-11",
        &[
            ("Budameru Vantena", "7:30 AM"),
            ("Ayodhya Nagar", "7:32 AM"),
            ("Lotus Land Mark", "7:35 AM"),
            ("Prabhas College(Fruit Market)", "7:40 AM"),
            ("MS Raja Rao Bridge", "7:45 AM"),
            ("Sobhan Babu Circle", "7:50 AM"),
            ("Challapalli Bunglaw", "7:55 AM"),
            ("Bandar Lakulu", "7:58 AM"),
            ("Varadhi", "8:00 AM"),
            ("VIT -AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-12",
        &[
            ("Meesal Raja Rao Bridge", "7:45 AM"),
            ("Sarada College", "7:47 AM"),
            ("Food Junction", "7:50 AM"),
            ("Madhura Nagar Signal", "7:55 AM"),
            ("Padavala Revu", "8:00 AM"),
            ("VIT -AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-13",
        &[
            ("ESI Hospital", "7:30 AM"),
            ("Gunadala Bridge", "7:32 AM"),
            ("Gunadala Center", "7:33 AM"),
            ("Padavala Revu", "7:35 AM"),
            ("Machavaram", "7:37 AM"),
            ("SRR College", "7:40 AM"),
            ("BSNL", "7:50 AM"),
            ("Sitarampuram Signal", "7:52 AM"),
            ("Vijaya Talkies", "7:53 AM"),
            ("Apsara Theater", "7:55 AM"),
            ("Challapalli Bunglow", "7:58 AM"),
            ("Bandar Lakulu", "8:00 AM"),
            ("Varadhi", "8:05 AM"),
            ("VIT -AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-14",
        &[
            ("Kondapalli (vtps colony)", "7:00 AM"),
            ("Ibrahimpatnam", "7:30 AM"),
            ("Kazipet", "7:40 AM"),
            ("Guntupalli", "7:42 AM"),
            ("VIT-AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-15",
        &[
            ("Guntupalli", "7:40 AM"),
            ("Rayanapadu X Road", "7:42 AM"),
            ("Gollapudi One Center", "7:45 AM"),
            ("Y Junction", "7:48 AM"),
            ("Andhra Hospitals", "7:50 AM"),
            ("Swathi Center", "7:53 AM"),
            ("Kanakadurgamma Flyover", "7:55 AM"),
            ("Trisakthi geetam", "8:00 AM"),
            ("Fire Station -Bus Stop", "8:05 AM"),
            ("Varadhi", "8:08 AM"),
            ("VIT-AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-16",
        &[
            ("Bhavanipuram Sivalayam", "7:15 AM"),
            ("Trends", "7:18 AM"),
            ("Bhavanipuram Church", "7:20 AM"),
            ("Sitara", "7:23 AM"),
            ("Kabela", "7:25 AM"),
            ("Milk Project", "7:27 AM"),
            ("Sai Ram Theater", "7:30 AM"),
            ("Chittinagar", "7:32 AM"),
            ("Vagu Center", "7:35 AM"),
            ("KBN College", "7:37 AM"),
            ("Panja Center", "7:40 AM"),
            ("KR Market", "7:43 AM"),
            ("Govt. Hospital - Near Railway", "7:45 AM"),
            ("VIT-AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-17",
        &[
            ("Andhra Hospitals", "7:50 AM"),
            ("Swathi Center", "7:53 AM"),
            ("Kanakadurga Flyover", "7:55 AM"),
            ("Krishnalanka Katta", "8:00 AM"),
            ("Fire Station -Bus Stop", "8:05 AM"),
            ("Varadhi", "8:08 AM"),
            ("VIT-AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-18",
        &[
            ("Auto Nagar Association Hall", "7:30 AM"),
            ("Gurunank colony", "7:32 AM"),
            ("Ramesh hospital", "7:35 AM"),
            ("ITI College", "7:37 AM"),
            ("Amma Kalyana Mandapam", "7:40 AM"),
            ("Jammi Chettu Centre", "7:45 AM"),
            ("Sridartha Arts & Sciences", "7:50 AM"),
            ("Commisioner office", "7:55 AM"),
            ("Raghavaiah Park", "8:00 AM"),
            ("Varadhi", "8:10 AM"),
            ("VIT-AP", "8:45 AM"),
        ],
    ),
    (
        "VV-19",
        &[
            ("Gurunank colony", "7:30 AM"),
            ("Ramesh hospital", "7:35 AM"),
            ("ITI College", "7:37 AM"),
            ("Amma Kalyana Mandapam", "7:40 AM"),
            ("Jammi Chettu Centre", "7:45 AM"),
            ("Sridartha Arts & Sciences", "7:50 AM"),
            ("Commisioner office", "7:55 AM"),
            ("Raghavaiah Park", "8:00 AM"),
            ("Varadhi", "8:10 AM"),
            ("VIT-AP", "8:45 AM"),
        ],
    ),
    (
        "VV-20",
        &[
            ("Varadhi", "7:50 AM"),
            ("Manipal", "7:52 AM"),
            ("Ushodaya Mart", "7:55 AM"),
            ("Praturu Road", "7:57 AM"),
            ("Kunchinapalli Road", "8:00 AM"),
            ("Kunchinapalli Sai Baba Temple", "8:01 AM"),
            ("D-Mrat", "8:03 AM"),
            ("Tadepalli Petrol Pump", "8:06 AM"),
            ("Undavalli Centre", "8:15 AM"),
            ("Penunmaka", "8:30 AM"),
            ("VIT-AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-21",
        &[
            ("Varadhi", "7:50 AM"),
            ("Kunchinapalli", "7:55 AM"),
            ("Tadepalli Petrol Bunk", "7:56 AM"),
            ("Undavalli", "8:05 AM"),
            ("Penunmaka", "8:10 AM"),
            ("VIT-AP Campus", "8:45 AM"),
        ],
    ),
    (
        "VV-22",
        &[
            ("Tadepalli", "8:15 AM"),
            ("Undavalli", "8:20 AM"),
            ("Penunmaka", "8:30 AM"),
            ("Mandadam", "8:40 AM"),
            ("VIT-AP Campus", "8:45 AM"),
        ],
    ),
];
