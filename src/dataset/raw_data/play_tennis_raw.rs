pub fn load_play_tennis_raw_data() -> (&'static str, &'static str) {
    let play_tennis_data_headers_raw = "
Outlook
Temperature
Humidity
Wind
PlayTennis
";

    let play_tennis_data_raw = "
Sunny,Hot,High,Weak,No
Sunny,Hot,High,Strong,No
Overcast,Hot,High,Weak,Yes
Rain,Mild,High,Weak,Yes
Rain,Cool,Normal,Weak,Yes
Rain,Cool,Normal,Strong,No
Overcast,Cool,Normal,Strong,Yes
Sunny,Mild,High,Weak,No
Sunny,Cool,Normal,Weak,Yes
Rain,Mild,Normal,Weak,Yes
Sunny,Mild,Normal,Strong,Yes
Overcast,Mild,High,Strong,Yes
Overcast,Hot,Normal,Weak,Yes
Rain,Mild,High,Strong,No
";

    (play_tennis_data_headers_raw, play_tennis_data_raw)
}
