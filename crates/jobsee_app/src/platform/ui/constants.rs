pub const LOADING_LABEL: &str = "Loading...";
pub const REFRESHING_LABEL: &str = "(refreshing...)";
pub const PROMPT: &str = "> ";

pub const HELP_TEXT: &str = "\
Commands:
  about | qualifications | responsibilities   switch tab (prefixes work)
  tab <name>                                  switch tab
  refresh, r                                  reload the current screen
  share, s                                    share the current job
  ok, dismiss                                 close an alert
  search <query>                              search listings
  open <job id>                               show one job
  help, ?                                     show this text
  quit, exit                                  leave";
