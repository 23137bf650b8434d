mod helpers;
mod login;
mod logout;
mod refresh;
mod signup;
mod update_email;
mod update_password;
