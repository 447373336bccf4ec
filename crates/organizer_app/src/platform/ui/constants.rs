pub const TITLE: &str = "File Organizer";
pub const PROMPT: &str = "> ";
pub const TICK_MILLIS: u64 = 250;

pub const HELP: &str = "\
Commands:
  path <folder>     set the folder to organize (text is taken as typed)
  clear             empty the folder input
  organize          organize the folder
  panel open|close  show or hide the settings panel
  toggle            flip \"Enable Backup\" (panel must be open)
  config            open the configuration file
  reload            re-read config.json
  dismiss <id>      close a notification
  instructions      show usage instructions
  help              show this list
  quit              exit";

pub const INSTRUCTIONS: &str = "\
Instructions

Editing config file
  1. Open the configuration file with any text editor
  2. Change the values to your liking
  3. IMPORTANT! Keep the original format
  4. Save the file

Running the program
  1. At first the button is disabled
  2. You need to enter any valid path to the input field
  3. Button becomes enabled, no matter what your input is
  4. Click the button to run the program
  5. If your path is valid, the program will run and organize your files to corresponding folders
  6. After run, the button will be disabled again and you will see the output on the screen";
